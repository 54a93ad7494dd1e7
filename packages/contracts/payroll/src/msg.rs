//! The messages accepted and returned by the cw-payroll contract
#![allow(clippy::module_name_repetitions)]

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};
use cw20::{Cw20CoinVerified, Cw20ReceiveMsg};

/// The message to instantiate the contract
#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to pause and remove any stream, the
    /// instantiator if `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
}

/// The messages to fund and manage payment streams
#[cw_serde]
pub enum ExecuteMsg {
    /// Fund a new stream from a cw20 `send` hook
    Receive(Cw20ReceiveMsg),
    /// Pay out everything vested so far on a stream
    Distribute {
        /// The stream to distribute
        id: u64,
    },
    /// Pause a running stream
    PauseStream {
        /// The stream to pause
        id: u64,
    },
    /// Link two streams so they pause and resume together
    LinkStream {
        /// The first stream of the pair
        left_stream_id: u64,
        /// The second stream of the pair
        right_stream_id: u64,
    },
    /// Detach two linked streams from each other
    DetachStream {
        /// The first stream of the pair
        left_stream_id: u64,
        /// The second stream of the pair
        right_stream_id: u64,
    },
    /// Resume a paused stream
    ResumeStream {
        /// The stream to resume
        id: u64,
    },
    /// Remove a stream and refund its unvested balance
    RemoveStream {
        /// The stream to remove
        id: u64,
    },
}

/// The queries exposed by the contract
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The contract configuration
    #[returns(ConfigResponse)]
    GetConfig {},

    /// A single stream by id
    #[returns(StreamResponse)]
    GetStream {
        /// The stream to look up
        id: u64,
    },

    /// All streams, paginated by id
    #[returns(ListStreamsResponse)]
    ListStreams {
        /// The stream id to start listing after
        #[serde(skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
        /// The maximum number of streams to return
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
}

/// The native coins of a wrapped balance
#[cw_serde]
pub struct NativeBalance(
    /// The coins, one entry per denom
    pub Vec<Coin>,
);

/// A balance in either native coins or a cw20 token
#[cw_serde]
pub enum WrappedBalance {
    /// Native bank coins
    Native(NativeBalance),
    /// A verified cw20 token amount
    Cw20(Cw20CoinVerified),
}

/// The response to the `GetConfig` query
#[cw_serde]
pub struct ConfigResponse {
    /// The account allowed to pause and remove any stream
    pub admin: Addr,
}

/// The response to the `GetStream` query
#[cw_serde]
pub struct StreamResponse {
    /// The stream id
    pub id: u64,
    /// The account that funded the stream
    pub admin: Addr,
    /// The account the stream pays out to
    pub recipient: Addr,
    /// The balance the stream was funded with
    pub balance: WrappedBalance,
    /// The amount already paid out to the recipient
    pub claimed_balance: WrappedBalance,
    /// The unix time in seconds at which vesting starts
    pub start_time: u64,
    /// The unix time in seconds at which the full balance is vested
    pub end_time: u64,
    /// The amount released per second
    pub rate_per_second: Uint128,
    /// Whether the stream is currently paused
    pub paused: bool,
    /// The unix time in seconds of the last pause, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused_time: Option<u64>,
    /// The total seconds the stream has spent paused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused_duration: Option<u64>,
    /// The id of the stream this one is linked to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<u64>,
    /// Whether the stream can be detached from its link
    pub is_detachable: bool,
}

/// The response to the `ListStreams` query
#[cw_serde]
pub struct ListStreamsResponse {
    /// The streams in ascending id order
    pub streams: Vec<StreamResponse>,
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, to_json_binary};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_query_msg_wire_shape() {
        assert_eq!(
            serde_json::to_value(QueryMsg::GetConfig {}).unwrap(),
            json!({ "get_config": {} })
        );
        assert_eq!(
            serde_json::to_value(QueryMsg::GetStream { id: 7 }).unwrap(),
            json!({ "get_stream": { "id": 7 } })
        );
        assert_eq!(
            serde_json::to_value(QueryMsg::ListStreams {
                start: None,
                limit: None,
            })
            .unwrap(),
            json!({ "list_streams": {} })
        );
        assert_eq!(
            serde_json::to_value(QueryMsg::ListStreams {
                start: Some(4),
                limit: Some(25),
            })
            .unwrap(),
            json!({ "list_streams": { "start": 4, "limit": 25 } })
        );
    }

    #[test]
    fn test_receive_hook_wire_shape() {
        let msg = ExecuteMsg::Receive(Cw20ReceiveMsg {
            sender: "juno1funder".to_string(),
            amount: Uint128::new(100_000),
            msg: to_json_binary(&json!({ "create_stream": {} })).unwrap(),
        });
        assert_eq!(
            serde_json::to_value(msg).unwrap(),
            json!({
                "receive": {
                    "sender": "juno1funder",
                    "amount": "100000",
                    "msg": "eyJjcmVhdGVfc3RyZWFtIjp7fX0="
                }
            })
        );
    }

    #[test]
    fn test_link_and_detach_wire_shape() {
        assert_eq!(
            serde_json::to_value(ExecuteMsg::LinkStream {
                left_stream_id: 1,
                right_stream_id: 2,
            })
            .unwrap(),
            json!({ "link_stream": { "left_stream_id": 1, "right_stream_id": 2 } })
        );
        assert_eq!(
            serde_json::to_value(ExecuteMsg::DetachStream {
                left_stream_id: 1,
                right_stream_id: 2,
            })
            .unwrap(),
            json!({ "detach_stream": { "left_stream_id": 1, "right_stream_id": 2 } })
        );
    }

    #[test]
    fn test_stream_lifecycle_wire_shape() {
        assert_eq!(
            serde_json::to_value(ExecuteMsg::Distribute { id: 1 }).unwrap(),
            json!({ "distribute": { "id": 1 } })
        );
        assert_eq!(
            serde_json::to_value(ExecuteMsg::PauseStream { id: 2 }).unwrap(),
            json!({ "pause_stream": { "id": 2 } })
        );
        assert_eq!(
            serde_json::to_value(ExecuteMsg::ResumeStream { id: 2 }).unwrap(),
            json!({ "resume_stream": { "id": 2 } })
        );
        assert_eq!(
            serde_json::to_value(ExecuteMsg::RemoveStream { id: 3 }).unwrap(),
            json!({ "remove_stream": { "id": 3 } })
        );
    }

    #[test]
    fn test_stream_response_deserializes_both_balance_kinds() {
        let native: StreamResponse = serde_json::from_value(json!({
            "id": 1,
            "admin": "juno1admin",
            "recipient": "juno1recipient",
            "balance": { "native": [{ "denom": "ujuno", "amount": "100000" }] },
            "claimed_balance": { "native": [] },
            "start_time": 1_700_000_000,
            "end_time": 1_731_536_000,
            "rate_per_second": "3",
            "paused": false,
            "is_detachable": true
        }))
        .unwrap();
        assert_eq!(
            native.balance,
            WrappedBalance::Native(NativeBalance(vec![coin(100_000, "ujuno")]))
        );
        assert_eq!(native.paused_time, None);
        assert_eq!(native.link_id, None);

        let cw20: StreamResponse = serde_json::from_value(json!({
            "id": 2,
            "admin": "juno1admin",
            "recipient": "juno1recipient",
            "balance": {
                "cw20": { "address": "juno1token", "amount": "5000" }
            },
            "claimed_balance": {
                "cw20": { "address": "juno1token", "amount": "0" }
            },
            "start_time": 1_700_000_000,
            "end_time": 1_731_536_000,
            "rate_per_second": "1",
            "paused": true,
            "paused_time": 1_710_000_000,
            "paused_duration": 3_600,
            "link_id": 3,
            "is_detachable": false
        }))
        .unwrap();
        assert_eq!(
            cw20.balance,
            WrappedBalance::Cw20(Cw20CoinVerified {
                address: Addr::unchecked("juno1token"),
                amount: Uint128::new(5_000),
            })
        );
        assert_eq!(cw20.link_id, Some(3));
    }
}
