//! This module defines the errors shared by all contract clients.

use serde::{Deserialize, Serialize};

/// The error type for contract client calls.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ClientError {
    /// The request never produced a chain response
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The chain rejected the smart query
    #[error("query failed: {0}")]
    Query(#[from] ContractQueryError),

    /// The transaction was included in a block but failed
    #[error("execution failed: {0}")]
    Execution(#[from] ChainExecutionError),

    /// The transaction could not be signed
    #[error("signing failed: {0}")]
    Signing(#[from] SigningError),

    /// JSON serialization or deserialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A transport-level failure: the request never reached the chain or the
/// connection dropped before a response arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
#[allow(clippy::module_name_repetitions)]
pub struct TransportError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Message of the underlying cause, if the transport reported one.
    pub cause: Option<String>,
}

/// A smart query the chain rejected, usually because the contract itself
/// returned an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("contract {contract_address}: {message}")]
#[allow(clippy::module_name_repetitions)]
pub struct ContractQueryError {
    /// Address of the queried contract.
    pub contract_address: String,
    /// Error message reported by the chain.
    pub message: String,
}

/// A transaction that was included in a block but failed during execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("tx {tx_hash} failed with code {code} in {codespace}: {raw_log}")]
#[allow(clippy::module_name_repetitions)]
pub struct ChainExecutionError {
    /// Hex-encoded hash of the failed transaction.
    pub tx_hash: String,
    /// ABCI error code.
    pub code: u32,
    /// Module the error code belongs to.
    pub codespace: String,
    /// Raw log output of the failed execution.
    pub raw_log: String,
}

/// A failure to sign a transaction for the configured sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("cannot sign for {sender}: {message}")]
#[allow(clippy::module_name_repetitions)]
pub struct SigningError {
    /// Address the transaction was to be signed for.
    pub sender: String,
    /// Description of the signing failure.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = ClientError::Transport(TransportError {
            message: "connection refused".to_string(),
            cause: Some("tcp connect error".to_string()),
        });
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn test_query_error_display() {
        let err = ClientError::Query(ContractQueryError {
            contract_address: "osmo1contract".to_string(),
            message: "Unauthorized".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "query failed: contract osmo1contract: Unauthorized"
        );
    }

    #[test]
    fn test_execution_error_display() {
        let err = ClientError::Execution(ChainExecutionError {
            tx_hash: "A1B2".to_string(),
            code: 5,
            codespace: "wasm".to_string(),
            raw_log: "insufficient funds".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "execution failed: tx A1B2 failed with code 5 in wasm: insufficient funds"
        );
    }

    #[test]
    fn test_signing_error_display() {
        let err = ClientError::Signing(SigningError {
            sender: "osmo1sender".to_string(),
            message: "no key for address".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "signing failed: cannot sign for osmo1sender: no key for address"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: ClientError = serde_json::from_str::<u64>("not json").unwrap_err().into();
        assert!(matches!(err, ClientError::Json(_)));
    }
}
