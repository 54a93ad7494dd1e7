//! The messages accepted and returned by the cw-escrow-streams contract
#![allow(clippy::module_name_repetitions)]

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

/// The message to instantiate the contract
#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to pause and remove any stream, the
    /// instantiator if `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
}

/// The messages to fund and manage escrowed streams
#[cw_serde]
pub enum ExecuteMsg {
    /// Fund a new stream from a cw20 `send` hook
    Receive(Cw20ReceiveMsg),
    /// Create a stream escrowed with the native coins sent along
    Create {
        /// The parameters of the new stream
        params: UncheckedStreamData,
    },
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
        /// The streams to link
        ids: StreamIds,
    },
    /// Detach a stream from its linked partner
    DetachStream {
        /// The stream to detach
        id: u64,
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

/// A denom the contract has not validated yet
#[cw_serde]
pub enum UncheckedDenom {
    /// A native bank denom
    Native(String),
    /// The address of a cw20 token, not yet checked
    Cw20(String),
}

/// A denom validated by the contract
#[cw_serde]
pub enum CheckedDenom {
    /// A native bank denom
    Native(String),
    /// The address of a cw20 token
    Cw20(Addr),
}

/// A linked pair of stream ids, serialized as a two-element array
#[cw_serde]
pub struct StreamIds(
    /// The left stream of the pair
    pub u64,
    /// The right stream of the pair
    pub u64,
);

/// The parameters for a new stream, as supplied by its creator
#[cw_serde]
pub struct UncheckedStreamData {
    /// The account the stream pays out to
    pub recipient: String,
    /// The amount escrowed for the stream
    pub balance: Uint128,
    /// The denom the stream pays out in, not yet checked
    pub denom: UncheckedDenom,
    /// The unix time in seconds at which vesting starts
    pub start_time: u64,
    /// The unix time in seconds at which the full balance is vested
    pub end_time: u64,
    /// A human readable title for the stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A human readable description of the stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the stream can be detached from a link
    pub is_detachable: bool,
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
    /// The amount still escrowed for the stream
    pub balance: Uint128,
    /// The amount already paid out to the recipient
    pub claimed_balance: Uint128,
    /// The denom the stream pays out in
    pub denom: CheckedDenom,
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
    /// A human readable title for the stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A human readable description of the stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The response to the `ListStreams` query
#[cw_serde]
pub struct ListStreamsResponse {
    /// The streams in ascending id order
    pub streams: Vec<StreamResponse>,
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::to_json_binary;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_query_msg_wire_shape() {
        assert_eq!(
            serde_json::to_value(QueryMsg::GetConfig {}).unwrap(),
            json!({ "get_config": {} })
        );
        assert_eq!(
            serde_json::to_value(QueryMsg::GetStream { id: 9 }).unwrap(),
            json!({ "get_stream": { "id": 9 } })
        );
        assert_eq!(
            serde_json::to_value(QueryMsg::ListStreams {
                start: None,
                limit: None,
            })
            .unwrap(),
            json!({ "list_streams": {} })
        );
    }

    #[test]
    fn test_create_wire_shape_omits_absent_fields() {
        let msg = ExecuteMsg::Create {
            params: UncheckedStreamData {
                recipient: "juno1recipient".to_string(),
                balance: Uint128::new(250_000),
                denom: UncheckedDenom::Native("ujuno".to_string()),
                start_time: 1_700_000_000,
                end_time: 1_731_536_000,
                title: None,
                description: None,
                is_detachable: true,
            },
        };
        assert_eq!(
            serde_json::to_value(msg).unwrap(),
            json!({
                "create": {
                    "params": {
                        "recipient": "juno1recipient",
                        "balance": "250000",
                        "denom": { "native": "ujuno" },
                        "start_time": 1_700_000_000,
                        "end_time": 1_731_536_000,
                        "is_detachable": true
                    }
                }
            })
        );
    }

    #[test]
    fn test_receive_hook_wire_shape() {
        let msg = ExecuteMsg::Receive(Cw20ReceiveMsg {
            sender: "juno1funder".to_string(),
            amount: Uint128::new(250_000),
            msg: to_json_binary(&json!({ "create": {} })).unwrap(),
        });
        assert_eq!(
            serde_json::to_value(msg).unwrap(),
            json!({
                "receive": {
                    "sender": "juno1funder",
                    "amount": "250000",
                    "msg": "eyJjcmVhdGUiOnt9fQ=="
                }
            })
        );
    }

    #[test]
    fn test_link_stream_serializes_ids_as_array() {
        assert_eq!(
            serde_json::to_value(ExecuteMsg::LinkStream {
                ids: StreamIds(3, 4),
            })
            .unwrap(),
            json!({ "link_stream": { "ids": [3, 4] } })
        );
        assert_eq!(
            serde_json::to_value(ExecuteMsg::DetachStream { id: 3 }).unwrap(),
            json!({ "detach_stream": { "id": 3 } })
        );
    }

    #[test]
    fn test_stream_lifecycle_wire_shape() {
        assert_eq!(
            serde_json::to_value(ExecuteMsg::Distribute { id: 5 }).unwrap(),
            json!({ "distribute": { "id": 5 } })
        );
        assert_eq!(
            serde_json::to_value(ExecuteMsg::PauseStream { id: 5 }).unwrap(),
            json!({ "pause_stream": { "id": 5 } })
        );
        assert_eq!(
            serde_json::to_value(ExecuteMsg::ResumeStream { id: 5 }).unwrap(),
            json!({ "resume_stream": { "id": 5 } })
        );
        assert_eq!(
            serde_json::to_value(ExecuteMsg::RemoveStream { id: 6 }).unwrap(),
            json!({ "remove_stream": { "id": 6 } })
        );
    }

    #[test]
    fn test_stream_response_roundtrips_chain_json() {
        let value = json!({
            "id": 1,
            "admin": "juno1admin",
            "recipient": "juno1recipient",
            "balance": "200000",
            "claimed_balance": "0",
            "denom": { "cw20": "juno1token" },
            "start_time": 1_700_000_000,
            "end_time": 1_731_536_000,
            "rate_per_second": "6",
            "paused": false,
            "is_detachable": false
        });

        let stream: StreamResponse = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(
            stream.denom,
            CheckedDenom::Cw20(Addr::unchecked("juno1token"))
        );
        assert_eq!(stream.claimed_balance, Uint128::zero());
        assert_eq!(stream.title, None);

        assert_eq!(serde_json::to_value(stream).unwrap(), value);
    }
}
