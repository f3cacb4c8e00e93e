//! Rules engine connection configuration.
//!
//! Built once per process invocation from environment variables and
//! passed into command handlers — no module-level singletons. The
//! private key never appears in `Debug` output.

use url::Url;

use irwa_core::ContractAddress;

/// Configuration for connecting to the rules engine.
///
/// Custom `Debug` implementation redacts the `private_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct EngineConfig {
    /// Base URL of the rules engine cloud API.
    pub base_url: Url,
    /// Address of the deployed rules engine diamond contract.
    pub engine_address: ContractAddress,
    /// JSON-RPC endpoint of the target chain.
    pub rpc_url: Url,
    /// Operator account address, if configured.
    pub user_address: Option<ContractAddress>,
    /// Operator private key, if configured. Redacted in `Debug`.
    pub private_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("base_url", &self.base_url)
            .field("engine_address", &self.engine_address)
            .field("rpc_url", &self.rpc_url)
            .field("user_address", &self.user_address)
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `RULES_ENGINE_URL` (required) — cloud API base URL.
    /// - `RULES_ENGINE_ADDRESS` (required) — engine contract address.
    /// - `RPC_URL` (default: `http://127.0.0.1:8545`)
    /// - `USER_ADDRESS` (optional)
    /// - `PRIV_KEY` (optional)
    /// - `RULES_ENGINE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = required_var("RULES_ENGINE_URL")?;
        let base_url = Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidUrl("RULES_ENGINE_URL", e.to_string()))?;

        let engine_address = required_var("RULES_ENGINE_ADDRESS")?;
        let engine_address = ContractAddress::new(&engine_address)
            .map_err(|e| ConfigError::InvalidAddress("RULES_ENGINE_ADDRESS", e.to_string()))?;

        let user_address = match std::env::var("USER_ADDRESS") {
            Ok(raw) => Some(
                ContractAddress::new(&raw)
                    .map_err(|e| ConfigError::InvalidAddress("USER_ADDRESS", e.to_string()))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            engine_address,
            rpc_url: env_url("RPC_URL", "http://127.0.0.1:8545")?,
            user_address,
            private_key: std::env::var("PRIV_KEY").ok(),
            timeout_secs: std::env::var("RULES_ENGINE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }
}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingVar(var))
}

fn env_url(var: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var, e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(&'static str, String),
    #[error("invalid contract address for {0}: {1}")]
    InvalidAddress(&'static str, String),
}
