//! This module implements the query and signing clients for the
//! tokenfactory issuer contract.
#![allow(clippy::module_name_repetitions)]

use std::ops::Deref;

use cosmwasm_std::Uint128;
use cw_client_core::{
    ClientError, ContractClient, ExecuteOptions, QueryTransport, SigningTransport, TxResponse,
};

use crate::msg::{
    AdditionalMetadata, AllowanceResponse, AllowancesResponse, BlacklisteesResponse,
    BlacklisterAllowancesResponse, DenomResponse, ExecuteMsg, FreezerAllowancesResponse,
    IsFrozenResponse, OwnerResponse, QueryMsg, StatusResponse,
};

/// The read-only client for the tokenfactory issuer contract.
#[derive(Debug)]
pub struct TokenfactoryIssuerQueryClient<T> {
    client: ContractClient<T>,
}

impl<T> TokenfactoryIssuerQueryClient<T> {
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

impl<T: QueryTransport> TokenfactoryIssuerQueryClient<T> {
    /// Whether transfers of the denom are currently frozen.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn is_frozen(&self) -> Result<IsFrozenResponse, ClientError> {
        self.client.smart_query(&QueryMsg::IsFrozen {}).await
    }

    /// The denom managed by this contract.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn denom(&self) -> Result<DenomResponse, ClientError> {
        self.client.smart_query(&QueryMsg::Denom {}).await
    }

    /// The current contract owner.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn owner(&self) -> Result<OwnerResponse, ClientError> {
        self.client.smart_query(&QueryMsg::Owner {}).await
    }

    /// The burn allowance of `address`.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn burn_allowance(&self, address: String) -> Result<AllowanceResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::BurnAllowance { address })
            .await
    }

    /// The burn allowances of all addresses, paginated.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn burn_allowances(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<AllowancesResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::BurnAllowances { start_after, limit })
            .await
    }

    /// The mint allowance of `address`.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn mint_allowance(&self, address: String) -> Result<AllowanceResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::MintAllowance { address })
            .await
    }

    /// The mint allowances of all addresses, paginated.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn mint_allowances(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<AllowancesResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::MintAllowances { start_after, limit })
            .await
    }

    /// Whether `address` is blacklisted.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn is_blacklisted(&self, address: String) -> Result<StatusResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::IsBlacklisted { address })
            .await
    }

    /// The blacklisted addresses, paginated.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn blacklistees(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<BlacklisteesResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::Blacklistees { start_after, limit })
            .await
    }

    /// Whether `address` holds the blacklister role.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn is_blacklister(&self, address: String) -> Result<StatusResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::IsBlacklister { address })
            .await
    }

    /// The addresses holding the blacklister role, paginated.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn blacklister_allowances(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<BlacklisterAllowancesResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::BlacklisterAllowances { start_after, limit })
            .await
    }

    /// Whether `address` holds the freezer role.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn is_freezer(&self, address: String) -> Result<StatusResponse, ClientError> {
        self.client.smart_query(&QueryMsg::IsFreezer { address }).await
    }

    /// The addresses holding the freezer role, paginated.
    ///
    /// # Errors
    /// Returns an error if the query fails or the response cannot be decoded.
    pub async fn freezer_allowances(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<FreezerAllowancesResponse, ClientError> {
        self.client
            .smart_query(&QueryMsg::FreezerAllowances { start_after, limit })
            .await
    }
}

/// The signing client for the tokenfactory issuer contract.
///
/// Derefs to [`TokenfactoryIssuerQueryClient`], so the full query surface
/// is available on this client as well.
#[derive(Debug)]
pub struct TokenfactoryIssuerClient<T> {
    query: TokenfactoryIssuerQueryClient<T>,
    sender: String,
}

impl<T> TokenfactoryIssuerClient<T> {
    /// Creates a signing client that executes as `sender` against the
    /// contract at `contract_address`.
    #[must_use]
    pub const fn new(transport: T, sender: String, contract_address: String) -> Self {
        Self {
            query: TokenfactoryIssuerQueryClient::new(transport, contract_address),
            sender,
        }
    }

    /// The address executions are signed for.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }
}

impl<T> Deref for TokenfactoryIssuerClient<T> {
    type Target = TokenfactoryIssuerQueryClient<T>;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl<T: SigningTransport> TokenfactoryIssuerClient<T> {
    /// Hands the tokenfactory admin of the denom to `new_admin`.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn change_token_factory_admin(
        &self,
        new_admin: String,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::ChangeTokenFactoryAdmin { new_admin }, options)
            .await
    }

    /// Hands ownership of the contract to `new_owner`.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn change_contract_owner(
        &self,
        new_owner: String,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::ChangeContractOwner { new_owner }, options)
            .await
    }

    /// Replaces the bank metadata of the denom.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn set_denom_metadata(
        &self,
        metadata: AdditionalMetadata,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::SetDenomMetadata { metadata }, options)
            .await
    }

    /// Grants or updates the mint allowance of `address`.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn set_minter(
        &self,
        address: String,
        allowance: Uint128,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::SetMinter { address, allowance }, options)
            .await
    }

    /// Grants or updates the burn allowance of `address`.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn set_burner(
        &self,
        address: String,
        allowance: Uint128,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::SetBurner { address, allowance }, options)
            .await
    }

    /// Grants or revokes the blacklister role of `address`.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn set_blacklister(
        &self,
        address: String,
        status: bool,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::SetBlacklister { address, status }, options)
            .await
    }

    /// Grants or revokes the freezer role of `address`.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn set_freezer(
        &self,
        address: String,
        status: bool,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::SetFreezer { address, status }, options)
            .await
    }

    /// Mints `amount` of the denom to `to_address` against the sender's
    /// mint allowance.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn mint(
        &self,
        to_address: String,
        amount: Uint128,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::Mint { to_address, amount }, options)
            .await
    }

    /// Burns `amount` of the denom from `from_address` against the
    /// sender's burn allowance.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn burn(
        &self,
        from_address: String,
        amount: Uint128,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(
            &ExecuteMsg::Burn {
                from_address,
                amount,
            },
            options,
        )
        .await
    }

    /// Adds `address` to or removes it from the blacklist.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn blacklist(
        &self,
        address: String,
        status: bool,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::Blacklist { address, status }, options)
            .await
    }

    /// Freezes or unfreezes all transfers of the denom.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be signed or broadcast,
    /// or fails on chain.
    pub async fn freeze(
        &self,
        status: bool,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.execute(&ExecuteMsg::Freeze { status }, options).await
    }

    async fn execute(
        &self,
        msg: &ExecuteMsg,
        options: ExecuteOptions,
    ) -> Result<TxResponse, ClientError> {
        self.query.client.execute(&self.sender, msg, options).await
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;
    use cw_client_core::{test_utils::MockTransport, ChainExecutionError, StdFee, TxFee};
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_no_argument_query_sends_empty_object() {
        let transport = MockTransport::new();
        transport.push_query_response(json!({ "is_frozen": true }));

        let client = TokenfactoryIssuerQueryClient::new(&transport, "osmo1issuer".to_string());
        let response = client.is_frozen().await.unwrap();
        assert!(response.is_frozen);

        let queries = transport.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].contract_address, "osmo1issuer");
        assert_eq!(queries[0].msg, json!({ "is_frozen": {} }));
    }

    #[tokio::test]
    async fn test_pagination_arguments_pass_through() {
        let transport = MockTransport::new();
        transport.push_query_response(json!({ "allowances": [] }));
        transport.push_query_response(json!({
            "allowances": [{ "address": "osmo1minter", "allowance": "250" }]
        }));

        let client = TokenfactoryIssuerQueryClient::new(&transport, "osmo1issuer".to_string());

        let empty = client.mint_allowances(None, None).await.unwrap();
        assert!(empty.allowances.is_empty());

        let listed = client
            .mint_allowances(Some("osmo1start".to_string()), Some(10))
            .await
            .unwrap();
        assert_eq!(listed.allowances[0].allowance, Uint128::new(250));

        let queries = transport.queries();
        assert_eq!(queries[0].msg, json!({ "mint_allowances": {} }));
        assert_eq!(
            queries[1].msg,
            json!({ "mint_allowances": { "start_after": "osmo1start", "limit": 10 } })
        );
    }

    #[tokio::test]
    async fn test_mint_with_default_options() {
        let transport = MockTransport::new();
        let client = TokenfactoryIssuerClient::new(
            &transport,
            "osmo1sender".to_string(),
            "osmo1issuer".to_string(),
        );

        client
            .mint(
                "osmo1recipient".to_string(),
                Uint128::new(1_000),
                ExecuteOptions::default(),
            )
            .await
            .unwrap();

        let executions = transport.executions();
        assert_eq!(executions.len(), 1);
        assert_eq!(executions[0].sender, "osmo1sender");
        assert_eq!(executions[0].contract_address, "osmo1issuer");
        assert_eq!(
            executions[0].msg,
            json!({ "mint": { "to_address": "osmo1recipient", "amount": "1000" } })
        );
        assert_eq!(executions[0].options, ExecuteOptions::default());
    }

    #[tokio::test]
    async fn test_options_pass_through_unchanged() {
        let transport = MockTransport::new();
        let client = TokenfactoryIssuerClient::new(
            &transport,
            "osmo1sender".to_string(),
            "osmo1issuer".to_string(),
        );

        let options = ExecuteOptions::default()
            .with_fee(TxFee::Fixed(StdFee::new(vec![coin(6_000, "uosmo")], 240_000)))
            .with_memo("issuer ops")
            .with_funds(vec![coin(1, "uosmo")]);
        client.freeze(true, options.clone()).await.unwrap();

        let executions = transport.executions();
        assert_eq!(executions[0].msg, json!({ "freeze": { "status": true } }));
        assert_eq!(executions[0].options, options);
    }

    #[tokio::test]
    async fn test_query_surface_available_on_signing_client() {
        let transport = MockTransport::new();
        transport.push_query_response(json!({ "denom": "factory/osmo1issuer/uusdc" }));

        let client = TokenfactoryIssuerClient::new(
            &transport,
            "osmo1sender".to_string(),
            "osmo1issuer".to_string(),
        );

        let response = client.denom().await.unwrap();
        assert_eq!(response.denom, "factory/osmo1issuer/uusdc");
        assert_eq!(client.sender(), "osmo1sender");
        assert_eq!(client.contract_address(), "osmo1issuer");
    }

    #[tokio::test]
    async fn test_execution_failure_passes_through_without_retry() {
        let transport = MockTransport::new();
        transport.push_execute_error(ClientError::Execution(ChainExecutionError {
            tx_hash: "DEAD".to_string(),
            code: 5,
            codespace: "wasm".to_string(),
            raw_log: "mint allowance exceeded".to_string(),
        }));

        let client = TokenfactoryIssuerClient::new(
            &transport,
            "osmo1sender".to_string(),
            "osmo1issuer".to_string(),
        );

        let err = client
            .mint(
                "osmo1recipient".to_string(),
                Uint128::new(u128::MAX),
                ExecuteOptions::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Execution(ref e) if e.code == 5));
        assert_eq!(transport.executions().len(), 1);
    }
}
