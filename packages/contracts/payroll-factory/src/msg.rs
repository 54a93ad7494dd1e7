//! The messages accepted and returned by the cw-payroll-factory contract
#![allow(clippy::module_name_repetitions)]

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;
use cw_utils::Expiration;

/// The message to instantiate a vesting payroll contract
///
/// The factory embeds this message unchanged when it instantiates a new
/// vesting contract on behalf of a caller.
#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to manage the vesting contract, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// The vesting terms
    pub params: UncheckedVestingParams,
}

/// The messages to instantiate vesting contracts and manage the factory
#[cw_serde]
pub enum ExecuteMsg {
    /// Instantiate a cw20-funded vesting contract from a cw20 `send` hook
    Receive(Cw20ReceiveMsg),
    /// Instantiate a vesting contract paid out in native coins
    InstantiateNativePayrollContract {
        /// The instantiate message for the new vesting contract
        instantiate_msg: InstantiateMsg,
        /// The label the new contract is instantiated under
        label: String,
    },
    /// Change the code id used for new vesting contracts
    UpdateCodeId {
        /// The code id to instantiate vesting contracts from
        vesting_code_id: u64,
    },
    /// Update the ownership of the factory itself
    UpdateOwnership(Action),
}

/// The queries exposed by the factory
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The vesting contracts instantiated by the factory, in ascending
    /// address order
    #[returns(Vec<Addr>)]
    ListVestingContracts {
        /// The address to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        /// The maximum number of contracts to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// The vesting contracts instantiated by the factory, in descending
    /// address order
    #[returns(Vec<Addr>)]
    ListVestingContractsReverse {
        /// The address to start listing before
        #[serde(skip_serializing_if = "Option::is_none")]
        start_before: Option<String>,
        /// The maximum number of contracts to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// The vesting contracts a given account instantiated, in ascending
    /// address order
    #[returns(Vec<Addr>)]
    ListVestingContractsByInstantiator {
        /// The account that instantiated the contracts
        instantiator: String,
        /// The address to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        /// The maximum number of contracts to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// The vesting contracts a given account instantiated, in descending
    /// address order
    #[returns(Vec<Addr>)]
    ListVestingContractsByInstantiatorReverse {
        /// The account that instantiated the contracts
        instantiator: String,
        /// The address to start listing before
        #[serde(skip_serializing_if = "Option::is_none")]
        start_before: Option<String>,
        /// The maximum number of contracts to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// The vesting contracts paying out to a given account, in ascending
    /// address order
    #[returns(Vec<Addr>)]
    ListVestingContractsByRecipient {
        /// The account the contracts pay out to
        recipient: String,
        /// The address to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        /// The maximum number of contracts to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// The vesting contracts paying out to a given account, in descending
    /// address order
    #[returns(Vec<Addr>)]
    ListVestingContractsByRecipientReverse {
        /// The account the contracts pay out to
        recipient: String,
        /// The address to start listing before
        #[serde(skip_serializing_if = "Option::is_none")]
        start_before: Option<String>,
        /// The maximum number of contracts to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },

    /// The ownership state of the factory
    #[returns(Ownership)]
    Ownership {},

    /// The code id used for new vesting contracts
    #[returns(u64)]
    CodeId {},
}

/// A denom the factory has not validated yet
#[cw_serde]
pub enum UncheckedDenom {
    /// A native bank denom
    Native(String),
    /// The address of a cw20 token, not yet checked
    Cw20(String),
}

/// The shape of a vesting schedule over time
///
/// `x` is the unix time in seconds and `y` the cumulative amount vested.
#[cw_serde]
pub enum Curve {
    /// A flat line at a constant value
    Constant {
        /// The constant value
        y: Uint128,
    },
    /// A straight line between two points, clamped outside them
    SaturatingLinear(SaturatingLinear),
    /// A series of connected line segments
    PiecewiseLinear(PiecewiseLinear),
}

/// A line from `(min_x, min_y)` to `(max_x, max_y)`, clamped to `min_y`
/// before `min_x` and to `max_y` after `max_x`
#[cw_serde]
pub struct SaturatingLinear {
    /// The time the line starts at
    pub min_x: u64,
    /// The value at and before `min_x`
    pub min_y: Uint128,
    /// The time the line ends at
    pub max_x: u64,
    /// The value at and after `max_x`
    pub max_y: Uint128,
}

/// A curve interpolated linearly between consecutive points
#[cw_serde]
pub struct PiecewiseLinear {
    /// The `(time, value)` points of the curve, in ascending time order
    pub steps: Vec<(u64, Uint128)>,
}

/// The vesting terms for a new payroll contract, as supplied by its creator
#[cw_serde]
pub struct UncheckedVestingParams {
    /// The account the vesting pays out to
    pub recipient: String,
    /// The total amount to vest
    pub amount: Uint128,
    /// The denom the vesting pays out in, not yet checked
    pub denom: UncheckedDenom,
    /// The cumulative amount vested as a function of time
    pub vesting_schedule: Curve,
    /// A human readable title for the vesting agreement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A human readable description of the vesting agreement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An ownership change for the factory
#[cw_serde]
pub enum Action {
    /// Offer ownership to a new account, optionally lapsing at an expiry
    TransferOwnership {
        /// The account offered ownership
        new_owner: String,
        /// When the offer lapses, if ever
        #[serde(skip_serializing_if = "Option::is_none")]
        expiry: Option<Expiration>,
    },
    /// Accept a pending ownership offer
    AcceptOwnership,
    /// Give up ownership of the factory entirely
    RenounceOwnership,
}

/// The response to the `Ownership` query
#[cw_serde]
pub struct Ownership {
    /// The current owner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Addr>,
    /// The account offered ownership, if an offer is pending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_owner: Option<Addr>,
    /// When the pending offer lapses, if an expiry was set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_expiry: Option<Expiration>,
}
