use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::models::user::{Role, User};

/// Session identity carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,          // user id
    pub username: String,
    pub role: Role,
    pub jti: String,       // token id, used for logout revocation
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn is_support(&self) -> bool {
        self.role.is_support()
    }
}

pub fn generate(user: &User, secret: &str, expiry_hours: u64) -> Result<String> {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role,
        jti: Uuid::new_v4().to_string(),
        exp: now + (expiry_hours as usize * 3600),
        iat: now,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;
    Ok(data.claims)
}
