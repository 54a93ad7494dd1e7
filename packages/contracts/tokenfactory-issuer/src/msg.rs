//! The messages accepted and returned by the tokenfactory issuer contract
#![allow(clippy::module_name_repetitions)]

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Uint128};

/// The message to instantiate the contract
#[cw_serde]
pub enum InstantiateMsg {
    /// Create a new tokenfactory denom owned by the contract
    NewToken {
        /// The subdenom of the created denom, appended to
        /// `factory/<contract_address>/`
        subdenom: String,
    },
    /// Take over an existing tokenfactory denom
    ExistingToken {
        /// The full denom to manage
        denom: String,
    },
}

/// The messages to manage the denom and its permissions
#[cw_serde]
pub enum ExecuteMsg {
    /// Hand the tokenfactory admin of the denom to another address
    ChangeTokenFactoryAdmin {
        /// The address to become the denom admin
        new_admin: String,
    },
    /// Hand ownership of this contract to another address
    ChangeContractOwner {
        /// The address to become the contract owner
        new_owner: String,
    },
    /// Replace the bank metadata of the denom
    SetDenomMetadata {
        /// The metadata to set
        metadata: AdditionalMetadata,
    },
    /// Grant or update the mint allowance of an address
    SetMinter {
        /// The address allowed to mint
        address: String,
        /// The amount the address may mint, zero revokes
        allowance: Uint128,
    },
    /// Grant or update the burn allowance of an address
    SetBurner {
        /// The address allowed to burn
        address: String,
        /// The amount the address may burn, zero revokes
        allowance: Uint128,
    },
    /// Grant or revoke the blacklister role of an address
    SetBlacklister {
        /// The address to change
        address: String,
        /// Whether the address may manage the blacklist
        status: bool,
    },
    /// Grant or revoke the freezer role of an address
    SetFreezer {
        /// The address to change
        address: String,
        /// Whether the address may freeze and unfreeze the denom
        status: bool,
    },
    /// Mint against the sender's mint allowance
    Mint {
        /// The address receiving the minted tokens
        to_address: String,
        /// The amount to mint
        amount: Uint128,
    },
    /// Burn against the sender's burn allowance
    Burn {
        /// The address the burned tokens are taken from
        from_address: String,
        /// The amount to burn
        amount: Uint128,
    },
    /// Add an address to or remove it from the blacklist
    Blacklist {
        /// The address to change
        address: String,
        /// Whether the address is blacklisted
        status: bool,
    },
    /// Freeze or unfreeze all transfers of the denom
    Freeze {
        /// Whether transfers are frozen
        status: bool,
    },
}

/// The sudo messages called by the bank module hooks
#[cw_serde]
pub enum SudoMsg {
    /// Called before every bank send of the managed denom
    BlockBeforeSend {
        /// The address the tokens move from
        from: String,
        /// The address the tokens move to
        to: String,
        /// The amount being sent
        amount: Coin,
    },
}

/// The queries exposed by the contract
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Whether transfers of the denom are currently frozen
    #[returns(IsFrozenResponse)]
    IsFrozen {},

    /// The denom managed by this contract
    #[returns(DenomResponse)]
    Denom {},

    /// The current contract owner
    #[returns(OwnerResponse)]
    Owner {},

    /// The burn allowance of a single address
    #[returns(AllowanceResponse)]
    BurnAllowance {
        /// The address to look up
        address: String,
    },

    /// The burn allowances of all addresses, paginated
    #[returns(AllowancesResponse)]
    BurnAllowances {
        /// The address to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        /// The maximum number of entries to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// The mint allowance of a single address
    #[returns(AllowanceResponse)]
    MintAllowance {
        /// The address to look up
        address: String,
    },

    /// The mint allowances of all addresses, paginated
    #[returns(AllowancesResponse)]
    MintAllowances {
        /// The address to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        /// The maximum number of entries to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// Whether an address is blacklisted
    #[returns(StatusResponse)]
    IsBlacklisted {
        /// The address to look up
        address: String,
    },

    /// The blacklisted addresses, paginated
    #[returns(BlacklisteesResponse)]
    Blacklistees {
        /// The address to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        /// The maximum number of entries to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// Whether an address holds the blacklister role
    #[returns(StatusResponse)]
    IsBlacklister {
        /// The address to look up
        address: String,
    },

    /// The addresses holding the blacklister role, paginated
    #[returns(BlacklisterAllowancesResponse)]
    BlacklisterAllowances {
        /// The address to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        /// The maximum number of entries to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// Whether an address holds the freezer role
    #[returns(StatusResponse)]
    IsFreezer {
        /// The address to look up
        address: String,
    },

    /// The addresses holding the freezer role, paginated
    #[returns(FreezerAllowancesResponse)]
    FreezerAllowances {
        /// The address to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        /// The maximum number of entries to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
}

/// Bank metadata attached to the denom
#[cw_serde]
pub struct AdditionalMetadata {
    /// The long description of the token
    pub description: String,
    /// The units the token can be expressed in
    pub denom_units: Vec<DenomUnit>,
    /// The denom unit shown to users
    pub display: String,
    /// The display name of the token
    pub name: String,
    /// The ticker symbol of the token
    pub symbol: String,
}

/// A named exponent of the base denom
#[cw_serde]
pub struct DenomUnit {
    /// The name of the unit
    pub denom: String,
    /// The power of ten relative to the base unit
    pub exponent: u32,
    /// Alternative names of the unit
    pub aliases: Vec<String>,
}

/// The response to the `IsFrozen` query
#[cw_serde]
pub struct IsFrozenResponse {
    /// Whether transfers of the denom are frozen
    pub is_frozen: bool,
}

/// The response to the `Denom` query
#[cw_serde]
pub struct DenomResponse {
    /// The denom managed by this contract
    pub denom: String,
}

/// The response to the `Owner` query
#[cw_serde]
pub struct OwnerResponse {
    /// The current contract owner
    pub address: String,
}

/// The response to the single-address allowance queries
#[cw_serde]
pub struct AllowanceResponse {
    /// The remaining allowance, zero if none was granted
    pub allowance: Uint128,
}

/// The response to the paginated allowance queries
#[cw_serde]
pub struct AllowancesResponse {
    /// The allowances in ascending address order
    pub allowances: Vec<AllowanceInfo>,
}

/// A single entry of a paginated allowance listing
#[cw_serde]
pub struct AllowanceInfo {
    /// The address holding the allowance
    pub address: String,
    /// The remaining allowance
    pub allowance: Uint128,
}

/// The response to the single-address status queries
#[cw_serde]
pub struct StatusResponse {
    /// Whether the flag is set for the address
    pub status: bool,
}

/// A single entry of a paginated status listing
#[cw_serde]
pub struct StatusInfo {
    /// The address the flag belongs to
    pub address: String,
    /// Whether the flag is set
    pub status: bool,
}

/// The response to the `Blacklistees` query
#[cw_serde]
pub struct BlacklisteesResponse {
    /// The blacklist entries in ascending address order
    pub blacklistees: Vec<StatusInfo>,
}

/// The response to the `BlacklisterAllowances` query
#[cw_serde]
pub struct BlacklisterAllowancesResponse {
    /// The blacklister entries in ascending address order
    pub blacklisters: Vec<StatusInfo>,
}

/// The response to the `FreezerAllowances` query
#[cw_serde]
pub struct FreezerAllowancesResponse {
    /// The freezer entries in ascending address order
    pub freezers: Vec<StatusInfo>,
}
