//! This module implements the query and signing clients for the cw-payroll
//! contract.
#![allow(clippy::module_name_repetitions)]

use std::ops::Deref;

use cw20::Cw20ReceiveMsg;
use cw_client_core::{
    ClientError, ContractClient, ExecuteOptions, QueryTransport, SigningTransport, TxResponse,
};

use crate::msg::{ConfigResponse, ExecuteMsg, ListStreamsResponse, QueryMsg, StreamResponse};

/// The read-only client for the cw-payroll contract.
#[derive(Debug)]
pub struct CwPayrollQueryClient<T> {
    client: ContractClient<T>,
}

impl<T> CwPayrollQueryClient<T> {
    /// Creates a query client for the contract at `contract_address`.
    #[must_use]
    pub const fn new(transport: T, contract_address: String) -> Self {
        Self {
            client: ContractClient::new(transport, contract_address),
        }
    }

    /// The address of the contract this client targets.
    #[must_use]
    pub fn contract_address(&self) -> &str {
        self.client.contract_address()
    }
}

impl<T: QueryTransport> CwPayrollQueryClient<T> {
    /// The contract configuration.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn get_config(&self) -> Result<ConfigResponse, ClientError> {
        self.client.smart_query(&QueryMsg::GetConfig {}).await
    }

    /// The stream with the given id.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn get_stream(&self, id: u64) -> Result<StreamResponse, ClientError> {
        self.client.smart_query(&QueryMsg::GetStream { id }).await
    }

    /// All streams, paginated by id.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn list_streams(
        &self,
        start: Option<u64>,
        limit: Option<u32>,
    ) -> Result<ListStreamsResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::ListStreams { start, limit })
            .await
    }
}

/// The signing client for the cw-payroll contract.
///
/// Derefs to [`CwPayrollQueryClient`], so the full query surface is
/// available on this client as well.
#[derive(Debug)]
pub struct CwPayrollClient<T> {
    query: CwPayrollQueryClient<T>,
    sender: String,
}

impl<T> CwPayrollClient<T> {
    /// Creates a signing client that executes as `sender` against the
    /// contract at `contract_address`.
    #[must_use]
    pub const fn new(transport: T, sender: String, contract_address: String) -> Self {
        Self {
            query: CwPayrollQueryClient::new(transport, contract_address),
            sender,
        }
    }

    /// The address executions are signed for.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }
}

impl<T> Deref for CwPayrollClient<T> {
    type Target = CwPayrollQueryClient<T>;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl<T: SigningTransport> CwPayrollClient<T> {
    /// Funds a new stream from a cw20 `send` hook.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn receive(
        &self,
        msg: Cw20ReceiveMsg,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::Receive(msg), options).await
    }

    /// Pays out everything vested so far on a stream.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn distribute(
        &self,
        id: u64,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::Distribute { id }, options).await
    }

    /// Pauses a running stream.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn pause_stream(
        &self,
        id: u64,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::PauseStream { id }, options).await
    }

    /// Links two streams so they pause and resume together.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn link_stream(
        &self,
        left_stream_id: u64,
        right_stream_id: u64,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(
            &ExecuteMsg::LinkStream {
                left_stream_id,
                right_stream_id,
            },
            options,
        )
        .await
    }

    /// Detaches two linked streams from each other.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn detach_stream(
        &self,
        left_stream_id: u64,
        right_stream_id: u64,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(
            &ExecuteMsg::DetachStream {
                left_stream_id,
                right_stream_id,
            },
            options,
        )
        .await
    }

    /// Resumes a paused stream.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn resume_stream(
        &self,
        id: u64,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::ResumeStream { id }, options).await
    }

    /// Removes a stream and refunds its unvested balance.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn remove_stream(
        &self,
        id: u64,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::RemoveStream { id }, options).await
    }

    async fn execute(
        &self,
        msg: &ExecuteMsg,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.query.client.execute(&self.sender, msg, options).await
    }
}
