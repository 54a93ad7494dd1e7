//! Execution options and transaction results shared by all contract clients.
#![allow(clippy::module_name_repetitions)]

use cosmwasm_std::{Binary, Coin, Event};
use serde::{Deserialize, Serialize};

/// Fee settings for a single contract execution.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TxFee {
    /// Simulate the transaction and let the transport derive the fee.
    #[default]
    Auto,
    /// Simulate, then scale the estimated gas by the given multiplier.
    Adjusted(f64),
    /// Use the given fee as-is, without simulating.
    Fixed(StdFee),
}

/// An explicit transaction fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdFee {
    /// Coins paid as the fee.
    pub amount: Vec<Coin>,
    /// Gas limit for the transaction.
    pub gas: u64,
    /// Account paying the fee, the sender if `None`.
    pub payer: Option<String>,
    /// Account granting a fee allowance, if any.
    pub granter: Option<String>,
}

impl StdFee {
    /// Creates a fee from fee coins and a gas limit.
    #[must_use]
    pub const fn new(amount: Vec<Coin>, gas: u64) -> Self {
        Self {
            amount,
            gas,
            payer: None,
            granter: None,
        }
    }
}

/// Per-call execution options: fee, transaction memo, and attached funds.
///
/// The default estimates the fee automatically, sets no memo, and attaches
/// no funds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExecuteOptions {
    /// Fee settings for the transaction.
    pub fee: TxFee,
    /// Transaction memo, left empty when `None`.
    pub memo: Option<String>,
    /// Native coins attached to the execution.
    pub funds: Vec<Coin>,
}

impl ExecuteOptions {
    /// Replaces the fee settings.
    #[must_use]
    pub fn with_fee(mut self, fee: TxFee) -> Self {
        self.fee = fee;
        self
    }

    /// Sets the transaction memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Replaces the native coins attached to the execution.
    #[must_use]
    pub fn with_funds(mut self, funds: Vec<Coin>) -> Self {
        self.funds = funds;
        self
    }
}

/// The result of a contract execution that made it into a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TxResponse {
    /// Hex-encoded transaction hash.
    pub tx_hash: String,
    /// Height of the block that included the transaction.
    pub height: u64,
    /// Gas requested by the transaction.
    pub gas_wanted: u64,
    /// Gas consumed by the transaction.
    pub gas_used: u64,
    /// Events emitted while executing the transaction.
    pub events: Vec<Event>,
    /// Response data returned by the contract, if any.
    pub data: Option<Binary>,
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;

    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExecuteOptions::default();
        assert_eq!(options.fee, TxFee::Auto);
        assert_eq!(options.memo, None);
        assert!(options.funds.is_empty());
    }

    #[test]
    fn test_options_builders() {
        let options = ExecuteOptions::default()
            .with_fee(TxFee::Adjusted(1.4))
            .with_memo("ibc transfer")
            .with_funds(vec![coin(25_000, "uosmo")]);

        assert_eq!(options.fee, TxFee::Adjusted(1.4));
        assert_eq!(options.memo.as_deref(), Some("ibc transfer"));
        assert_eq!(options.funds, vec![coin(25_000, "uosmo")]);
    }

    #[test]
    fn test_fixed_fee() {
        let fee = StdFee::new(vec![coin(5_000, "uosmo")], 200_000);
        assert_eq!(fee.gas, 200_000);
        assert_eq!(fee.payer, None);
        assert_eq!(fee.granter, None);

        let options = ExecuteOptions::default().with_fee(TxFee::Fixed(fee.clone()));
        assert_eq!(options.fee, TxFee::Fixed(fee));
    }

    #[test]
    fn test_tx_response_deserializes_chain_shape() {
        let response: TxResponse = serde_json::from_value(serde_json::json!({
            "tx_hash": "C0FFEE",
            "height": 12_345,
            "gas_wanted": 200_000,
            "gas_used": 154_321,
            "events": [
                {
                    "type": "wasm",
                    "attributes": [{ "key": "action", "value": "mint" }]
                }
            ],
            "data": null
        }))
        .unwrap();

        assert_eq!(response.tx_hash, "C0FFEE");
        assert_eq!(response.height, 12_345);
        assert_eq!(response.events.len(), 1);
        assert_eq!(response.events[0].ty, "wasm");
        assert_eq!(response.data, None);
    }
}
