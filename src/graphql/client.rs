//! HTTP subgraph client — `SubgraphHttp`.
//!
//! POSTs `{query, variables}` to the subgraph endpoint and unwraps the GraphQL
//! envelope. Optional response cache for `FetchPolicy::CacheFirst` queries.

use crate::error::GraphqlError;
use crate::graphql::queries::operation_name;
use crate::graphql::retry::{RetryConfig, RetryPolicy};
use crate::graphql::{FetchPolicy, GraphqlRequest, GraphqlResponse, SubgraphQuery};

use async_lock::RwLock;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Low-level HTTP client for a GraphQL subgraph.
pub struct SubgraphHttp {
    url: String,
    client: Client,
    retry: RetryPolicy,
    cache_ttl: Duration,
    /// Response cache: document + variables → (data, fetched_at)
    cache: Arc<RwLock<HashMap<String, (Value, Instant)>>>,
}

impl SubgraphHttp {
    pub fn new(url: &str) -> Result<Self, GraphqlError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
            retry: RetryPolicy::None,
            cache_ttl: Duration::from_secs(60),
            cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Drop every cached response.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    fn cache_key(document: &str, variables: &Value) -> String {
        format!("{}\u{0}{}", document, variables)
    }

    async fn cached(&self, key: &str) -> Option<Value> {
        let cache = self.cache.read().await;
        cache.get(key).and_then(|(data, fetched_at)| {
            (fetched_at.elapsed() < self.cache_ttl).then(|| data.clone())
        })
    }

    async fn request_with_retry(
        &self,
        document: &str,
        variables: &Value,
    ) -> Result<Value, GraphqlError> {
        let config = match &self.retry {
            RetryPolicy::None => {
                return self.do_request(document, variables).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(document, variables).await {
                Ok(data) => return Ok(data),
                Err(e) => {
                    let should_retry = match &e {
                        GraphqlError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        GraphqlError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            config.retryable_statuses.contains(&429)
                        }
                        GraphqlError::Timeout => true,
                        GraphqlError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying {} against {}",
                            operation_name(document),
                            self.url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(GraphqlError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request(&self, document: &str, variables: &Value) -> Result<Value, GraphqlError> {
        let body = GraphqlRequest {
            query: document,
            variables,
        };

        let resp = self.client.post(&self.url).json(&body).send().await?;
        let status = resp.status();

        if status.is_success() {
            let envelope = resp.json::<GraphqlResponse>().await?;
            return envelope.into_data();
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            408 | 504 if body_text.is_empty() => Err(GraphqlError::Timeout),
            429 => Err(GraphqlError::RateLimited { retry_after_ms }),
            400..=499 => Err(GraphqlError::BadRequest(body_text)),
            _ => Err(GraphqlError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

#[async_trait]
impl SubgraphQuery for SubgraphHttp {
    async fn query(
        &self,
        document: &str,
        variables: Value,
        policy: FetchPolicy,
    ) -> Result<Value, GraphqlError> {
        let operation = operation_name(document);

        if policy == FetchPolicy::CacheFirst {
            let key = Self::cache_key(document, &variables);
            if let Some(data) = self.cached(&key).await {
                tracing::debug!(operation, "Serving cached subgraph response");
                return Ok(data);
            }

            tracing::debug!(operation, %variables, "Querying subgraph");
            let data = self.request_with_retry(document, &variables).await?;
            self.cache
                .write()
                .await
                .insert(key, (data.clone(), Instant::now()));
            return Ok(data);
        }

        tracing::debug!(operation, %variables, "Querying subgraph");
        self.request_with_retry(document, &variables).await
    }
}

impl Clone for SubgraphHttp {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            client: self.client.clone(),
            retry: self.retry.clone(),
            cache_ttl: self.cache_ttl,
            cache: self.cache.clone(),
        }
    }
}
