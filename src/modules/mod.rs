//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services like EVM JSON-RPC providers.

pub mod evm;
