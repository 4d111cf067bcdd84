//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried in tokens minted by the external identity provider
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject (actor ID)
    pub sub: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}
