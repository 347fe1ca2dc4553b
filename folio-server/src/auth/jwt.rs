//! Admin JWT tokens

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// JWT claims for admin sessions
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin ID
    pub sub: String,
    pub email: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated admin identity, inserted into request extensions
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub id: i64,
    pub email: String,
}

const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a session token for an admin
pub fn create_token(admin_id: i64, email: &str, secret: &str) -> Result<String, AuthError> {
    let now = chrono::Utc::now();
    let claims = AdminClaims {
        sub: admin_id.to_string(),
        email: email.to_string(),
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    Ok(jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Verify a session token and return the admin it belongs to
pub fn verify_token(token: &str, secret: &str) -> Result<CurrentAdmin, AuthError> {
    let data = jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    let id = data
        .claims
        .sub
        .parse()
        .map_err(|_| AuthError::MalformedHeader)?;

    Ok(CurrentAdmin {
        id,
        email: data.claims.email,
    })
}
