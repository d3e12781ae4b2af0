use chrono::Utc;
use dashmap::DashMap;

use super::jwt::Claims;

/// Token ids revoked by logout, kept until the token would have expired anyway.
#[derive(Default)]
pub struct RevokedTokens {
    entries: DashMap<String, usize>,
}

impl RevokedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&self, claims: &Claims) {
        self.prune();
        self.entries.insert(claims.jti.clone(), claims.exp);
    }

    pub fn is_revoked(&self, jti: &str) -> bool {
        self.entries.contains_key(jti)
    }

    fn prune(&self) {
        let now = Utc::now().timestamp() as usize;
        self.entries.retain(|_, exp| *exp > now);
    }
}
