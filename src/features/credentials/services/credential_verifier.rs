use std::sync::Arc;

use alloy::json_abi::Function;

use crate::core::config::ChainConfig;
use crate::features::credentials::error::CredentialError;
use crate::features::credentials::models::VerificationResult;
use crate::features::credentials::services::CredentialStore;
use crate::modules::evm::{
    coerce_args, is_read_only, returns_single, ContractAbi, EvmError, EvmRpcClient,
};
use crate::shared::constants::VERIFY_CREDENTIAL_FUNCTION;

/// Checks a user's stored credential hash against the on-chain registry
///
/// Each call connects to the provider, binds the registry contract and runs a
/// single read-only `verifyCredential(hash)` call. No state survives a call.
pub struct CredentialVerifier {
    store: Arc<dyn CredentialStore>,
    chain: EvmRpcClient,
    config: ChainConfig,
}

impl CredentialVerifier {
    pub fn new(store: Arc<dyn CredentialStore>, config: ChainConfig) -> Result<Self, EvmError> {
        let chain = EvmRpcClient::new(config.request_timeout)?;
        Ok(Self {
            store,
            chain,
            config,
        })
    }

    pub async fn verify(&self, user_id: &str) -> Result<VerificationResult, CredentialError> {
        let hash = self
            .store
            .get_user_hash(user_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load credential hash for {}: {:?}", user_id, e);
                CredentialError::Lookup(e)
            })?
            .ok_or_else(|| CredentialError::HashNotFound(user_id.to_string()))?;

        let connection = self
            .chain
            .connect(&self.config.rpc_url)
            .await
            .map_err(|e| {
                tracing::error!("EVM provider {} unreachable: {}", self.config.rpc_url, e);
                CredentialError::Connection(e)
            })?;

        let function =
            registry_function(&self.config.contract_abi).map_err(CredentialError::ContractBinding)?;

        let args = coerce_args(function, &[hash.as_str()]).map_err(|e| {
            tracing::error!("Stored credential hash for {} is malformed: {}", user_id, e);
            CredentialError::MalformedHash {
                user_id: user_id.to_string(),
                source: e,
            }
        })?;

        let contract = connection
            .bind_contract(&self.config.contract_address, &self.config.contract_abi)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to bind credential contract {}: {}",
                    self.config.contract_address,
                    e
                );
                CredentialError::ContractBinding(e)
            })?;

        let is_valid = contract.call_bool(function, &args).await.map_err(|e| {
            tracing::error!("{} call failed for {}: {}", VERIFY_CREDENTIAL_FUNCTION, user_id, e);
            CredentialError::ContractCall(e)
        })?;

        let result = VerificationResult::from_contract(is_valid);
        tracing::info!(
            "Credential check for user={} against {} on chain {}: {}",
            user_id,
            contract.address(),
            connection.chain_id(),
            result
        );

        Ok(result)
    }
}

/// The registry ABI must expose `verifyCredential(<hash>) returns (bool)`
fn registry_function(abi: &ContractAbi) -> Result<&Function, EvmError> {
    let function = abi.function(VERIFY_CREDENTIAL_FUNCTION).ok_or_else(|| {
        EvmError::Abi(format!("ABI has no {} function", VERIFY_CREDENTIAL_FUNCTION))
    })?;

    if function.inputs.len() != 1 || !returns_single(function, "bool") {
        return Err(EvmError::Abi(format!(
            "{} must take one argument and return bool",
            function.signature()
        )));
    }

    if !is_read_only(function) {
        tracing::warn!(
            "{} is not declared view/pure; querying it with eth_call anyway",
            function.signature()
        );
    }

    Ok(function)
}
