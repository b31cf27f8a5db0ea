//! Datafeed route handlers.

use super::envelope::{success, ApiError};
use super::AppState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::Arc;

type HandlerResult = Result<Response, ApiError>;

#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub symbol: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub resolution: Option<String>,
    pub countback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub symbol: Option<String>,
    pub skip: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PairInfoQuery {
    pub token0: Option<String>,
    pub token1: Option<String>,
}

fn required<'q>(value: &'q Option<String>, name: &str) -> Result<&'q str, ApiError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!("Missing query parameter: {name}"))),
    }
}

fn number<T: FromStr>(value: &str, name: &str) -> Result<T, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid query parameter {name}: {value}")))
}

pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let name = &state.client.exchange().name;
    success(&json!({ "data": format!("Welcome to the {name} UDF Adapter for TradingView.") }))
}

pub async fn time() -> Response {
    success(&json!({ "data": chrono::Utc::now().timestamp() }))
}

pub async fn config(State(state): State<Arc<AppState>>) -> Response {
    success(&state.client.symbols().describe())
}

pub async fn symbols(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolQuery>,
) -> HandlerResult {
    let symbol = required(&query.symbol, "symbol")?.to_lowercase();

    state.client.symbols().refresh().await;
    let info = state.client.symbols().info(&symbol).await?;
    Ok(success(&info))
}

pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> HandlerResult {
    let symbol = required(&query.symbol, "symbol")?.to_lowercase();
    let from: i64 = number(required(&query.from, "from")?, "from")?;
    let to: i64 = number(required(&query.to, "to")?, "to")?;
    let resolution = required(&query.resolution, "resolution")?;
    let countback: u32 = match query.countback.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => number(v, "countback")?,
        _ => state.default_countback,
    };

    state.client.symbols().refresh().await;
    let history = state
        .client
        .history()
        .get(&symbol, from, to, resolution, countback)
        .await?;
    Ok(success(&history))
}

/// Succeeds with the bare transaction list; failures use the envelope.
pub async fn transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TransactionsQuery>,
) -> HandlerResult {
    let symbol = required(&query.symbol, "symbol")?.to_lowercase();
    let skip: u32 = number(required(&query.skip, "skip")?, "skip")?;
    let limit: u32 = number(required(&query.limit, "limit")?, "limit")?;

    state.client.symbols().refresh().await;
    let transactions = state.client.transactions().list(&symbol, skip, limit).await?;
    Ok(Json(transactions).into_response())
}

pub async fn pair_info(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PairInfoQuery>,
) -> HandlerResult {
    let token0 = required(&query.token0, "token0")?.to_lowercase();
    let token1 = required(&query.token1, "token1")?.to_lowercase();

    state.client.symbols().refresh().await;
    let info = state.client.pairs().address(&token0, &token1).await?;
    Ok(success(&info))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
