#![doc = include_str!("../README.md")]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod client;
pub mod msg;

pub use client::{CwEscrowStreamsClient, CwEscrowStreamsQueryClient};
