//! Token-validation configuration

/// Settings for validating identity-provider JWTs.
///
/// Issuer and audience checks are optional: local development tokens
/// carry neither claim.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 shared secret
    pub jwt_secret: String,
    /// Expected `iss` claim, checked when set
    pub issuer: Option<String>,
    /// Expected `aud` claim, checked when set
    pub audience: Option<String>,
}
