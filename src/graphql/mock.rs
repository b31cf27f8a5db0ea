//! In-memory `SubgraphQuery` serving canned responses per operation.
//!
//! Every call is recorded so callers can assert on what was (or was not) fetched.

use crate::error::GraphqlError;
use crate::graphql::queries::operation_name;
use crate::graphql::{FetchPolicy, SubgraphQuery};

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded query.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: String,
    pub variables: Value,
    pub policy: FetchPolicy,
}

#[derive(Debug, Clone)]
enum Canned {
    Data(Value),
    Error(String),
}

#[derive(Debug, Default)]
pub struct MockSubgraph {
    responses: Mutex<HashMap<String, Canned>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSubgraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `operation` with `data` until replaced.
    pub fn with_response(self, operation: &str, data: Value) -> Self {
        self.set_response(operation, data);
        self
    }

    /// Fail `operation` with a GraphQL error message until replaced.
    pub fn with_error(self, operation: &str, message: &str) -> Self {
        self.set_error(operation, message);
        self
    }

    pub fn set_response(&self, operation: &str, data: Value) {
        self.lock_responses()
            .insert(operation.to_string(), Canned::Data(data));
    }

    pub fn set_error(&self, operation: &str, message: &str) {
        self.lock_responses()
            .insert(operation.to_string(), Canned::Error(message.to_string()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Calls made for one operation, in order.
    pub fn calls_for(&self, operation: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.operation == operation)
            .collect()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, Canned>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SubgraphQuery for MockSubgraph {
    async fn query(
        &self,
        document: &str,
        variables: Value,
        policy: FetchPolicy,
    ) -> Result<Value, GraphqlError> {
        let operation = operation_name(document).to_string();

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                operation: operation.clone(),
                variables,
                policy,
            });
        }

        let canned = self.lock_responses().get(&operation).cloned();
        match canned {
            Some(Canned::Data(data)) => Ok(data),
            Some(Canned::Error(message)) => Err(GraphqlError::Query(vec![message])),
            None => Err(GraphqlError::MissingData),
        }
    }
}
