//! Transport traits connecting typed contract clients to a chain.
//!
//! Implementations wrap an RPC or gRPC connection and live outside this
//! workspace; the contract clients stay agnostic of the underlying protocol.
#![allow(clippy::module_name_repetitions)]

use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::ClientError,
    tx::{ExecuteOptions, TxResponse},
};

/// A read-only connection to a chain that can run contract smart queries.
#[async_trait::async_trait]
pub trait QueryTransport: Send + Sync {
    /// Runs a smart query against the contract at `contract_address` and
    /// returns the contract's JSON response.
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or the chain rejects
    /// the query.
    async fn query_contract_smart(
        &self,
        contract_address: &str,
        msg: Value,
    ) -> Result<Value, ClientError>;
}

/// A connection that can additionally sign and broadcast contract
/// executions on behalf of a sender address.
///
/// Every signing transport is also a [`QueryTransport`].
#[async_trait::async_trait]
pub trait SigningTransport: QueryTransport {
    /// Signs a contract execution for `sender`, broadcasts it, and waits
    /// for the transaction to be included in a block.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed, the broadcast
    /// fails, or the execution fails on chain.
    async fn execute_contract(
        &self,
        sender: &str,
        contract_address: &str,
        msg: Value,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError>;
}

#[async_trait::async_trait]
impl<T: QueryTransport + ?Sized> QueryTransport for &T {
    async fn query_contract_smart(
        &self,
        contract_address: &str,
        msg: Value,
    ) -> Result<Value, ClientError> {
        (**self).query_contract_smart(contract_address, msg).await
    }
}

#[async_trait::async_trait]
impl<T: QueryTransport + ?Sized> QueryTransport for Arc<T> {
    async fn query_contract_smart(
        &self,
        contract_address: &str,
        msg: Value,
    ) -> Result<Value, ClientError> {
        (**self).query_contract_smart(contract_address, msg).await
    }
}

#[async_trait::async_trait]
impl<T: SigningTransport + ?Sized> SigningTransport for &T {
    async fn execute_contract(
        &self,
        sender: &str,
        contract_address: &str,
        msg: Value,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        (**self)
            .execute_contract(sender, contract_address, msg, options)
            .await
    }
}

#[async_trait::async_trait]
impl<T: SigningTransport + ?Sized> SigningTransport for Arc<T> {
    async fn execute_contract(
        &self,
        sender: &str,
        contract_address: &str,
        msg: Value,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        (**self)
            .execute_contract(sender, contract_address, msg, options)
            .await
    }
}
