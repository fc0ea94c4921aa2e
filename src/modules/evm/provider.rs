use std::time::Duration;

use alloy::contract::{ContractInstance, Interface};
use alloy::dyn_abi::DynSolValue;
use alloy::json_abi::Function;
use alloy::primitives::Address;
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;

use super::abi::{returns_single, ContractAbi};
use super::EvmError;
use crate::shared::validation::EVM_ADDRESS_REGEX;

/// Owns the timeout-bounded HTTP client every provider connection reuses
#[derive(Clone)]
pub struct EvmRpcClient {
    http: reqwest::Client,
}

impl EvmRpcClient {
    pub fn new(request_timeout: Duration) -> Result<Self, EvmError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| EvmError::Client(e.to_string()))?;

        Ok(Self { http })
    }

    /// Reach the provider and confirm it answers `eth_chainId`
    pub async fn connect(&self, rpc_url: &str) -> Result<EvmConnection, EvmError> {
        let url: reqwest::Url = rpc_url
            .parse()
            .map_err(|_| EvmError::InvalidUrl(rpc_url.to_string()))?;

        let transport = Http::with_client(self.http.clone(), url);
        let provider: RootProvider = RootProvider::new(RpcClient::new(transport, false));
        let chain_id = provider.get_chain_id().await?;

        tracing::debug!("Connected to EVM provider {} (chain id {})", rpc_url, chain_id);

        Ok(EvmConnection { provider, chain_id })
    }
}

/// A provider that answered `eth_chainId`
pub struct EvmConnection {
    provider: RootProvider,
    chain_id: u64,
}

impl EvmConnection {
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Bind a deployed contract; fails if the address is malformed or holds no code
    pub async fn bind_contract(
        &self,
        address: &str,
        abi: &ContractAbi,
    ) -> Result<BoundContract, EvmError> {
        if !EVM_ADDRESS_REGEX.is_match(address) {
            return Err(EvmError::InvalidAddress(address.to_string()));
        }
        let address: Address = address
            .parse()
            .map_err(|_| EvmError::InvalidAddress(address.to_string()))?;

        let code = self.provider.get_code_at(address).await?;
        if code.is_empty() {
            return Err(EvmError::NoContractCode(address));
        }

        Ok(BoundContract {
            instance: ContractInstance::new(
                address,
                self.provider.clone(),
                Interface::new(abi.json_abi().clone()),
            ),
        })
    }
}

/// Contract bound to a live connection
pub struct BoundContract {
    instance: ContractInstance<RootProvider>,
}

impl BoundContract {
    pub fn address(&self) -> &Address {
        self.instance.address()
    }

    /// `eth_call` a function returning a single `bool`
    pub async fn call_bool(
        &self,
        function: &Function,
        args: &[DynSolValue],
    ) -> Result<bool, EvmError> {
        if !returns_single(function, "bool") {
            return Err(EvmError::Abi(format!(
                "{} does not return a single bool",
                function.signature()
            )));
        }

        tracing::debug!("eth_call {} on {}", function.signature(), self.address());

        let output = self.instance.function(&function.name, args)?.call().await?;

        match output.as_slice() {
            [DynSolValue::Bool(value)] => Ok(*value),
            other => Err(EvmError::InvalidReturn(format!("{:?}", other))),
        }
    }
}
