//! Read-only EVM contract access on top of alloy
//!
//! A verification walks three separately failable steps: reach a provider,
//! bind a deployed contract by address and JSON ABI, then `eth_call` it.
//! No signing, no transactions.

mod abi;
mod provider;

pub use abi::{coerce_args, is_read_only, returns_single, ContractAbi};
pub use provider::EvmRpcClient;

use alloy::primitives::Address;
use alloy::transports::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum EvmError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Invalid provider URL '{0}'")]
    InvalidUrl(String),

    #[error("Provider request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("No contract code deployed at {0}")]
    NoContractCode(Address),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("Invalid {kind} argument: {reason}")]
    InvalidArgument { kind: String, reason: String },

    #[error("Contract call failed: {0}")]
    Call(#[from] alloy::contract::Error),

    #[error("Unexpected return value: {0}")]
    InvalidReturn(String),
}
