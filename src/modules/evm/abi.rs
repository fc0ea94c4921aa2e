use alloy::dyn_abi::{DynSolValue, Specifier};
use alloy::json_abi::{Function, JsonAbi, Param, StateMutability};
use serde::Deserialize;

use super::EvmError;

/// Bare ABI array, or a build artifact carrying an `abi` field
#[derive(Deserialize)]
#[serde(untagged)]
enum AbiDocument {
    Bare(JsonAbi),
    Artifact { abi: JsonAbi },
}

/// Contract interface used to bind and call the registry
#[derive(Debug, Clone, PartialEq)]
pub struct ContractAbi {
    abi: JsonAbi,
}

impl ContractAbi {
    pub fn new(abi: JsonAbi) -> Self {
        Self { abi }
    }

    pub fn from_json(raw: &str) -> Result<Self, EvmError> {
        let document: AbiDocument =
            serde_json::from_str(raw).map_err(|e| EvmError::Abi(e.to_string()))?;

        Ok(Self::new(match document {
            AbiDocument::Bare(abi) => abi,
            AbiDocument::Artifact { abi } => abi,
        }))
    }

    /// `verifyCredential(bytes32 credentialHash) view returns (bool)`
    pub fn credential_registry() -> Self {
        let function = Function {
            name: "verifyCredential".to_string(),
            inputs: vec![param("credentialHash", "bytes32")],
            outputs: vec![param("", "bool")],
            state_mutability: StateMutability::View,
        };

        let mut abi = JsonAbi::new();
        abi.functions
            .insert(function.name.clone(), vec![function]);
        Self::new(abi)
    }

    /// First overload with the given name
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.abi.function(name).and_then(|overloads| overloads.first())
    }

    pub fn json_abi(&self) -> &JsonAbi {
        &self.abi
    }
}

fn param(name: &str, ty: &str) -> Param {
    Param {
        ty: ty.to_string(),
        name: name.to_string(),
        components: Vec::new(),
        internal_type: None,
    }
}

pub fn is_read_only(function: &Function) -> bool {
    matches!(
        function.state_mutability,
        StateMutability::View | StateMutability::Pure
    )
}

/// True when the function returns exactly one value of type `ty`
pub fn returns_single(function: &Function, ty: &str) -> bool {
    function.outputs.len() == 1 && function.outputs[0].ty == ty
}

/// Parse textual arguments into ABI values following the function's input types
pub fn coerce_args(function: &Function, args: &[&str]) -> Result<Vec<DynSolValue>, EvmError> {
    if args.len() != function.inputs.len() {
        return Err(EvmError::Abi(format!(
            "{} expects {} argument(s), got {}",
            function.signature(),
            function.inputs.len(),
            args.len()
        )));
    }

    function
        .inputs
        .iter()
        .zip(args)
        .map(|(param, raw)| {
            let ty = param
                .resolve()
                .map_err(|e| EvmError::Abi(format!("{}: {}", param.ty, e)))?;
            ty.coerce_str(raw).map_err(|e| EvmError::InvalidArgument {
                kind: param.ty.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;

    #[test]
    fn test_credential_registry_abi() {
        let abi = ContractAbi::credential_registry();
        let function = abi.function("verifyCredential").unwrap();

        assert_eq!(function.signature(), "verifyCredential(bytes32)");
        assert!(is_read_only(function));
        assert!(returns_single(function, "bool"));
        assert!(abi.function("revokeCredential").is_none());
    }

    #[test]
    fn test_from_json_bare_and_artifact() {
        let bare = r#"[
            {"type": "event", "name": "CredentialIssued", "inputs": [], "anonymous": false},
            {"type": "function", "name": "verifyCredential",
             "inputs": [{"name": "h", "type": "string"}],
             "outputs": [{"name": "", "type": "bool"}],
             "stateMutability": "view"}
        ]"#;
        let abi = ContractAbi::from_json(bare).unwrap();
        assert_eq!(
            abi.function("verifyCredential").unwrap().signature(),
            "verifyCredential(string)"
        );
        assert!(abi.function("CredentialIssued").is_none());

        let artifact = format!(r#"{{"contractName": "Registry", "abi": {}}}"#, bare);
        assert_eq!(ContractAbi::from_json(&artifact).unwrap(), abi);

        assert!(ContractAbi::from_json("{\"abi\": 3}").is_err());
    }

    #[test]
    fn test_coerce_bytes32_hash() {
        let abi = ContractAbi::credential_registry();
        let function = abi.function("verifyCredential").unwrap();
        let hash = format!("0x{}", "ab".repeat(32));

        let values = coerce_args(function, &[&hash]).unwrap();

        assert_eq!(
            values,
            vec![DynSolValue::FixedBytes(B256::repeat_byte(0xab), 32)]
        );
    }

    #[test]
    fn test_coerce_rejects_bad_arguments() {
        let abi = ContractAbi::credential_registry();
        let function = abi.function("verifyCredential").unwrap();

        assert!(matches!(
            coerce_args(function, &["not-hex"]),
            Err(EvmError::InvalidArgument { .. })
        ));
        assert!(matches!(coerce_args(function, &[]), Err(EvmError::Abi(_))));
    }

    #[test]
    fn test_returns_single_and_mutability() {
        let abi = ContractAbi::from_json(
            r#"[{"type": "function", "name": "revoke",
                 "inputs": [{"name": "h", "type": "bytes32"}],
                 "outputs": [], "stateMutability": "nonpayable"}]"#,
        )
        .unwrap();
        let function = abi.function("revoke").unwrap();

        assert!(!is_read_only(function));
        assert!(!returns_single(function, "bool"));
    }
}
