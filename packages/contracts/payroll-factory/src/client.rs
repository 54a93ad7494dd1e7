//! This module implements the query and signing clients for the
//! cw-payroll-factory contract.
#![allow(clippy::module_name_repetitions)]

use std::ops::Deref;

use cosmwasm_std::Addr;
use cw20::Cw20ReceiveMsg;
use cw_client_core::{
    ClientError, ContractClient, ExecuteOptions, QueryTransport, SigningTransport, TxResponse,
};

use crate::msg::{Action, ExecuteMsg, InstantiateMsg, Ownership, QueryMsg};

/// The read-only client for the cw-payroll-factory contract.
#[derive(Debug)]
pub struct CwPayrollFactoryQueryClient<T> {
    client: ContractClient<T>,
}

impl<T> CwPayrollFactoryQueryClient<T> {
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

impl<T: QueryTransport> CwPayrollFactoryQueryClient<T> {
    /// The vesting contracts instantiated by the factory, in ascending
    /// address order.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn list_vesting_contracts(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Addr>, ClientError> {
        self.client
            .smart_query(&QueryMsg::ListVestingContracts { start_after, limit })
            .await
    }

    /// The vesting contracts instantiated by the factory, in descending
    /// address order.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn list_vesting_contracts_reverse(
        &self,
        start_before: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Addr>, ClientError> {
        self.client
            .smart_query(&QueryMsg::ListVestingContractsReverse {
                start_before,
                limit,
            })
            .await
    }

    /// The vesting contracts a given account instantiated, in ascending
    /// address order.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn list_vesting_contracts_by_instantiator(
        &self,
        instantiator: String,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Addr>, ClientError> {
        self.client
            .smart_query(&QueryMsg::ListVestingContractsByInstantiator {
                instantiator,
                start_after,
                limit,
            })
            .await
    }

    /// The vesting contracts a given account instantiated, in descending
    /// address order.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn list_vesting_contracts_by_instantiator_reverse(
        &self,
        instantiator: String,
        start_before: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Addr>, ClientError> {
        self.client
            .smart_query(&QueryMsg::ListVestingContractsByInstantiatorReverse {
                instantiator,
                start_before,
                limit,
            })
            .await
    }

    /// The vesting contracts paying out to a given account, in ascending
    /// address order.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn list_vesting_contracts_by_recipient(
        &self,
        recipient: String,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Addr>, ClientError> {
        self.client
            .smart_query(&QueryMsg::ListVestingContractsByRecipient {
                recipient,
                start_after,
                limit,
            })
            .await
    }

    /// The vesting contracts paying out to a given account, in descending
    /// address order.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn list_vesting_contracts_by_recipient_reverse(
        &self,
        recipient: String,
        start_before: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Addr>, ClientError> {
        self.client
            .smart_query(&QueryMsg::ListVestingContractsByRecipientReverse {
                recipient,
                start_before,
                limit,
            })
            .await
    }

    /// The ownership state of the factory.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn ownership(&self) -> Result<Ownership, ClientError> {
        self.client.smart_query(&QueryMsg::Ownership {}).await
    }

    /// The code id used for new vesting contracts.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn code_id(&self) -> Result<u64, ClientError> {
        self.client.smart_query(&QueryMsg::CodeId {}).await
    }
}

/// The signing client for the cw-payroll-factory contract.
///
/// Derefs to [`CwPayrollFactoryQueryClient`], so the full query surface is
/// available on this client as well.
#[derive(Debug)]
pub struct CwPayrollFactoryClient<T> {
    query: CwPayrollFactoryQueryClient<T>,
    sender: String,
}

impl<T> CwPayrollFactoryClient<T> {
    /// Creates a signing client that executes as `sender` against the
    /// contract at `contract_address`.
    #[must_use]
    pub const fn new(transport: T, sender: String, contract_address: String) -> Self {
        Self {
            query: CwPayrollFactoryQueryClient::new(transport, contract_address),
            sender,
        }
    }

    /// The address executions are signed for.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }
}

impl<T> Deref for CwPayrollFactoryClient<T> {
    type Target = CwPayrollFactoryQueryClient<T>;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl<T: SigningTransport> CwPayrollFactoryClient<T> {
    /// Instantiates a cw20-funded vesting contract from a cw20 `send` hook.
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

    /// Instantiates a vesting contract paid out in native coins.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn instantiate_native_payroll_contract(
        &self,
        instantiate_msg: InstantiateMsg,
        label: String,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(
            &ExecuteMsg::InstantiateNativePayrollContract {
                instantiate_msg,
                label,
            },
            options,
        )
        .await
    }

    /// Changes the code id used for new vesting contracts.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn update_code_id(
        &self,
        vesting_code_id: u64,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::UpdateCodeId { vesting_code_id }, options)
            .await
    }

    /// Updates the ownership of the factory itself.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn update_ownership(
        &self,
        action: Action,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::UpdateOwnership(action), options)
            .await
    }

    async fn execute(
        &self,
        msg: &ExecuteMsg,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.query.client.execute(&self.sender, msg, options).await
    }
}
