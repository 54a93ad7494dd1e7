//! This module implements the [`ContractClient`] handle the typed contract
//! clients delegate to.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{
    error::ClientError,
    transport::{QueryTransport, SigningTransport},
    tx::{ExecuteOptions, TxResponse},
};

/// A handle to a single instantiated contract over an injected transport.
///
/// The handle is stateless: every call serializes its message, delegates to
/// the transport, and decodes the result.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ContractClient<T> {
    transport: T,
    contract_address: String,
}

impl<T> ContractClient<T> {
    /// Creates a handle for the contract at `contract_address`.
    #[must_use]
    pub const fn new(transport: T, contract_address: String) -> Self {
        Self {
            transport,
            contract_address,
        }
    }

    /// The address of the contract this handle targets.
    #[must_use]
    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    /// The injected transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: QueryTransport> ContractClient<T> {
    /// Serializes `msg`, runs it as a smart query, and decodes the typed
    /// response.
    ///
    /// # Errors
    /// Returns an error if the message cannot be serialized, the transport
    /// fails, or the response cannot be decoded into `R`.
    #[tracing::instrument(skip_all)]
    pub async fn smart_query<M: Serialize, R: DeserializeOwned>(
        &self,
        msg: &M,
    ) -> Result<R, ClientError> {
        let msg = serde_json::to_value(msg)?;
        debug!(contract = %self.contract_address, %msg, "smart query");

        let response = self
            .transport
            .query_contract_smart(&self.contract_address, msg)
            .await?;
        Ok(serde_json::from_value(response)?)
    }
}

impl<T: SigningTransport> ContractClient<T> {
    /// Serializes `msg` and broadcasts it as a contract execution signed
    /// for `sender`.
    ///
    /// # Errors
    /// Returns an error if the message cannot be serialized, the
    /// transaction cannot be signed or broadcast, or the execution fails on
    /// chain.
    #[tracing::instrument(skip_all)]
    pub async fn execute<M: Serialize>(
        &self,
        sender: &str,
        msg: &M,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        let msg = serde_json::to_value(msg)?;
        debug!(contract = %self.contract_address, %sender, %msg, "execute");

        self.transport
            .execute_contract(sender, &self.contract_address, msg, options)
            .await
    }
}
