use std::sync::Arc;

use crate::core::error::Result;
use crate::features::auth::clients::AuthProviderClient;
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, RegisterRequestDto};

/// Service for authentication operations (register, login)
///
/// Pure delegation to the external provider; the reports API itself is
/// unauthenticated and the dashboard gate lives in the client.
pub struct AuthService {
    provider: Arc<AuthProviderClient>,
}

impl AuthService {
    pub fn new(provider: Arc<AuthProviderClient>) -> Self {
        Self { provider }
    }

    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        let response = self.provider.register(&dto.email, &dto.password).await?;
        tracing::info!("Registered admin account for {}", dto.email);
        Ok(response)
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        self.provider.login(&dto.email, &dto.password).await
    }
}
