use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::AuthProviderConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::AuthResponseDto;

#[derive(Debug, Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorResponse {
    #[serde(default)]
    message: String,
}

/// HTTP client for the external auth provider
///
/// Token issuance and credential storage are entirely the provider's
/// problem; this client only forwards register/login calls.
pub struct AuthProviderClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl AuthProviderClient {
    pub fn new(config: &AuthProviderConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResponseDto> {
        self.post("/register", email, password).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponseDto> {
        self.post("/login", email, password).await
    }

    async fn post(&self, path: &str, email: &str, password: &str) -> Result<AuthResponseDto> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .post(&url)
            .json(&CredentialsRequest { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Auth provider unreachable: {}", e);
                AppError::ExternalServiceError("Auth provider unreachable".to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<AuthResponseDto>().await.map_err(|e| {
                tracing::error!("Invalid auth provider response: {}", e);
                AppError::ExternalServiceError("Invalid auth provider response".to_string())
            });
        }

        let message = response
            .json::<ProviderErrorResponse>()
            .await
            .map(|e| e.message)
            .unwrap_or_default();

        Err(match status.as_u16() {
            401 | 403 => AppError::Unauthorized(non_empty(message, "Invalid credentials")),
            404 => AppError::NotFound(non_empty(message, "User not found")),
            409 => AppError::Conflict(non_empty(message, "Email already registered")),
            400 => AppError::Validation(non_empty(message, "Invalid credentials payload")),
            _ => {
                tracing::error!("Auth provider returned {}: {}", status, message);
                AppError::ExternalServiceError("Auth provider error".to_string())
            }
        })
    }
}

fn non_empty(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
