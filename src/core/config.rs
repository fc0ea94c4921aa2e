use std::env;
use std::time::Duration;

use crate::modules::evm::ContractAbi;
use crate::shared::validation::EVM_ADDRESS_REGEX;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub chain: ChainConfig,
    pub suggestion_api: SuggestionApiConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Where and how to reach the credential registry contract
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// JSON-RPC endpoint of the EVM provider
    pub rpc_url: String,
    /// `0x`-prefixed 20-byte contract address
    pub contract_address: String,
    /// Interface of the deployed contract
    pub contract_abi: ContractAbi,
    /// Upper bound for every single RPC round trip
    pub request_timeout: Duration,
}

/// AI suggestion API endpoint
#[derive(Debug, Clone)]
pub struct SuggestionApiConfig {
    pub base_url: String,
    pub endpoint_path: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            chain: ChainConfig::from_env()?,
            suggestion_api: SuggestionApiConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?,
            acquire_timeout_secs: parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                Self::DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            idle_timeout_secs: parse_or("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?,
            max_lifetime_secs: parse_or("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Helpdesk API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the helpdesk backend".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl ChainConfig {
    const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let rpc_url = env::var("CHAIN_RPC_URL")
            .map_err(|_| "CHAIN_RPC_URL environment variable is required".to_string())?;

        let contract_address = env::var("CREDENTIAL_CONTRACT_ADDRESS").map_err(|_| {
            "CREDENTIAL_CONTRACT_ADDRESS environment variable is required".to_string()
        })?;
        let contract_address = parse_contract_address(contract_address)?;

        let contract_abi = match env::var("CREDENTIAL_CONTRACT_ABI_PATH")
            .ok()
            .filter(|s| !s.is_empty())
        {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read contract ABI '{}': {}", path, e))?;
                ContractAbi::from_json(&raw)
                    .map_err(|e| format!("Invalid contract ABI '{}': {}", path, e))?
            }
            None => ContractAbi::credential_registry(),
        };

        let timeout_secs = parse_or("CHAIN_RPC_TIMEOUT_SECS", Self::DEFAULT_RPC_TIMEOUT_SECS)?;

        Ok(Self {
            rpc_url,
            contract_address,
            contract_abi,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl SuggestionApiConfig {
    pub const DEFAULT_ENDPOINT_PATH: &'static str = "/api/ai-suggest/";
    const DEFAULT_TIMEOUT_SECS: u64 = 15;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("SUGGESTION_API_BASE_URL")
            .map_err(|_| "SUGGESTION_API_BASE_URL environment variable is required".to_string())?;

        let endpoint_path = env::var("SUGGESTION_API_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ENDPOINT_PATH.to_string());

        let timeout_secs = parse_or("SUGGESTION_API_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            base_url,
            endpoint_path,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Full URL the payload is posted to
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.endpoint_path.starts_with('/') {
            format!("{}{}", base, self.endpoint_path)
        } else {
            format!("{}/{}", base, self.endpoint_path)
        }
    }
}

fn parse_contract_address(raw: String) -> Result<String, String> {
    let address = raw.trim().to_string();
    if !EVM_ADDRESS_REGEX.is_match(&address) {
        return Err(format!(
            "CREDENTIAL_CONTRACT_ADDRESS must be a 0x-prefixed 40 hex digit address, got '{}'",
            raw
        ));
    }
    Ok(address)
}

fn parse_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr + ToString,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_config(base_url: &str, endpoint_path: &str) -> SuggestionApiConfig {
        SuggestionApiConfig {
            base_url: base_url.to_string(),
            endpoint_path: endpoint_path.to_string(),
            request_timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_endpoint_url_joins_single_slash() {
        let config = api_config("http://ai.local/", "/api/ai-suggest/");
        assert_eq!(config.endpoint_url(), "http://ai.local/api/ai-suggest/");

        let config = api_config("http://ai.local", "api/ai-suggest/");
        assert_eq!(config.endpoint_url(), "http://ai.local/api/ai-suggest/");
    }

    #[test]
    fn test_contract_address_is_validated() {
        assert_eq!(
            parse_contract_address(" 0x52908400098527886E0F7030069857D2E4169EE7\n".to_string()),
            Ok("0x52908400098527886E0F7030069857D2E4169EE7".to_string())
        );
        assert!(parse_contract_address("0x1234".to_string()).is_err());
        assert!(parse_contract_address("52908400098527886E0F7030069857D2E4169EE7".to_string()).is_err());
        assert!(parse_contract_address(String::new()).is_err());
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }
}
