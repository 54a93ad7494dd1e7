#![doc = include_str!("../README.md")]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod client;
pub mod error;
pub mod transport;
pub mod tx;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use client::ContractClient;
pub use error::{
    ChainExecutionError, ClientError, ContractQueryError, SigningError, TransportError,
};
pub use transport::{QueryTransport, SigningTransport};
pub use tx::{ExecuteOptions, StdFee, TxFee, TxResponse};
