//! An in-memory transport for exercising contract clients in tests.

use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};

use serde_json::Value;

use crate::{
    error::ClientError,
    transport::{QueryTransport, SigningTransport},
    tx::{ExecuteOptions, TxResponse},
};

/// A smart query recorded by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    /// Address the query targeted.
    pub contract_address: String,
    /// The JSON message the client sent.
    pub msg: Value,
}

/// A contract execution recorded by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedExecution {
    /// Sender the execution was signed for.
    pub sender: String,
    /// Address the execution targeted.
    pub contract_address: String,
    /// The JSON message the client sent.
    pub msg: Value,
    /// Options the caller passed.
    pub options: ExecuteOptions,
}

/// An in-memory transport that records every call and replays queued
/// results.
///
/// Smart queries pop from the queued query results and panic when none is
/// queued. Executions fall back to a default [`TxResponse`], so tests that
/// only inspect the outgoing message need no setup.
#[derive(Debug, Default)]
pub struct MockTransport {
    queries: Mutex<Vec<RecordedQuery>>,
    executions: Mutex<Vec<RecordedExecution>>,
    query_results: Mutex<VecDeque<Result<Value, ClientError>>>,
    execute_results: Mutex<VecDeque<Result<TxResponse, ClientError>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Creates a mock with no recorded calls and no queued results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the JSON value the next smart query resolves to.
    pub fn push_query_response(&self, response: Value) {
        lock(&self.query_results).push_back(Ok(response));
    }

    /// Queues an error for the next smart query.
    pub fn push_query_error(&self, error: ClientError) {
        lock(&self.query_results).push_back(Err(error));
    }

    /// Queues the response of the next execution.
    pub fn push_execute_response(&self, response: TxResponse) {
        lock(&self.execute_results).push_back(Ok(response));
    }

    /// Queues an error for the next execution.
    pub fn push_execute_error(&self, error: ClientError) {
        lock(&self.execute_results).push_back(Err(error));
    }

    /// All smart queries received so far, oldest first.
    #[must_use]
    pub fn queries(&self) -> Vec<RecordedQuery> {
        lock(&self.queries).clone()
    }

    /// All executions received so far, oldest first.
    #[must_use]
    pub fn executions(&self) -> Vec<RecordedExecution> {
        lock(&self.executions).clone()
    }
}

#[async_trait::async_trait]
impl QueryTransport for MockTransport {
    async fn query_contract_smart(
        &self,
        contract_address: &str,
        msg: Value,
    ) -> Result<Value, ClientError> {
        lock(&self.queries).push(RecordedQuery {
            contract_address: contract_address.to_string(),
            msg,
        });
        lock(&self.query_results)
            .pop_front()
            .expect("no query result queued on MockTransport")
    }
}

#[async_trait::async_trait]
impl SigningTransport for MockTransport {
    async fn execute_contract(
        &self,
        sender: &str,
        contract_address: &str,
        msg: Value,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        lock(&self.executions).push(RecordedExecution {
            sender: sender.to_string(),
            contract_address: contract_address.to_string(),
            msg,
            options,
        });
        lock(&self.execute_results)
            .pop_front()
            .unwrap_or_else(|| Ok(TxResponse::default()))
    }
}
