//! # Rules Engine Policy API Client
//!
//! Typed access to the cloud-side policy operations. The wire surface
//! is deliberately small:
//!
//! - `POST {base}/v1/policies` — create a policy, returns `{policyId}`.
//! - `POST {base}/v1/policies/{id}/contracts` — apply the policy to a
//!   deployed contract.
//! - `GET {base}/v1/policies/{id}` — existence check (200/404).
//!
//! All other crates go through the [`RulesEngine`] trait so the
//! transport can be swapped without touching the CLI or codec.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use irwa_core::{ContractAddress, PolicyId};
use irwa_policy::PolicyDocument;

use crate::config::{ConfigError, EngineConfig};

/// Errors from rules engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Client configuration problem.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport-level failure.
    #[error("http error calling {endpoint}: {source}")]
    Http {
        /// The endpoint being called.
        endpoint: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The engine answered with a non-success status.
    #[error("rules engine returned {status} for {endpoint}: {message}")]
    Api {
        /// The endpoint that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The engine answered with a body the client cannot use.
    #[error("unexpected response from {endpoint}: {detail}")]
    InvalidResponse {
        /// The endpoint that answered.
        endpoint: String,
        /// What was wrong with the body.
        detail: String,
    },

    /// The referenced policy does not exist in the engine.
    #[error("policy {0} does not exist in the rules engine")]
    UnknownPolicy(PolicyId),
}

/// The cloud-side policy operations, consumed as opaque calls.
#[allow(async_fn_in_trait)]
pub trait RulesEngine {
    /// Register a validated policy; returns the assigned id.
    async fn create_policy(&self, policy: &PolicyDocument) -> Result<PolicyId, EngineError>;

    /// Bind an existing policy to a deployed contract.
    async fn append_policy(
        &self,
        policy_id: PolicyId,
        contract: &ContractAddress,
    ) -> Result<(), EngineError>;

    /// Whether the engine knows the given policy id.
    async fn policy_exists(&self, policy_id: PolicyId) -> Result<bool, EngineError>;
}

/// Fail with [`EngineError::UnknownPolicy`] unless the policy exists.
pub async fn ensure_policy_exists(
    engine: &impl RulesEngine,
    policy_id: PolicyId,
) -> Result<(), EngineError> {
    if engine.policy_exists(policy_id).await? {
        Ok(())
    } else {
        Err(EngineError::UnknownPolicy(policy_id))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePolicyResponse {
    policy_id: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AppendPolicyRequest<'a> {
    contract_address: &'a str,
}

/// HTTP client for the rules engine cloud API.
#[derive(Debug, Clone)]
pub struct HttpRulesEngine {
    http: reqwest::Client,
    base_url: url::Url,
}

impl HttpRulesEngine {
    /// Build a client from configuration.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EngineError::Http {
                endpoint: "client_init".to_string(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    async fn error_for_status(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, EngineError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(EngineError::Api {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message,
        })
    }
}

impl RulesEngine for HttpRulesEngine {
    async fn create_policy(&self, policy: &PolicyDocument) -> Result<PolicyId, EngineError> {
        let endpoint = self.endpoint("v1/policies");
        tracing::debug!(%endpoint, policy = %policy.policy_name, "creating policy");
        let response = self
            .http
            .post(&endpoint)
            .json(policy)
            .send()
            .await
            .map_err(|e| EngineError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        let response = Self::error_for_status(&endpoint, response).await?;
        let body: CreatePolicyResponse =
            response.json().await.map_err(|e| EngineError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        PolicyId::new(body.policy_id).map_err(|_| EngineError::InvalidResponse {
            endpoint,
            detail: format!("engine assigned invalid policy id {}", body.policy_id),
        })
    }

    async fn append_policy(
        &self,
        policy_id: PolicyId,
        contract: &ContractAddress,
    ) -> Result<(), EngineError> {
        let endpoint = self.endpoint(&format!("v1/policies/{policy_id}/contracts"));
        tracing::debug!(%endpoint, %contract, "applying policy to contract");
        let response = self
            .http
            .post(&endpoint)
            .json(&AppendPolicyRequest {
                contract_address: contract.as_str(),
            })
            .send()
            .await
            .map_err(|e| EngineError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        Self::error_for_status(&endpoint, response).await?;
        Ok(())
    }

    async fn policy_exists(&self, policy_id: PolicyId) -> Result<bool, EngineError> {
        let endpoint = self.endpoint(&format!("v1/policies/{policy_id}"));
        tracing::debug!(%endpoint, "checking policy existence");
        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| EngineError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::error_for_status(&endpoint, response).await?;
        Ok(true)
    }
}
