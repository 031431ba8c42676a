use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Bearer credential issued by the external auth provider
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_short_password() {
        let dto = RegisterRequestDto {
            email: "admin@example.org".to_string(),
            password: "short".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        let dto = LoginRequestDto {
            email: "not-an-email".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let parsed: AuthResponseDto = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(parsed.token_type, "Bearer");
    }
}
