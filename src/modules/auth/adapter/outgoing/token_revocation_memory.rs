use std::collections::HashSet;
use std::sync::RwLock;

use crate::modules::auth::application::ports::outgoing::token_revocation::TokenRevocationList;

/// Process-local revocation list. Sessions are long-lived and revocations
/// rare, so the set is never pruned; a restart clears it, and restart also
/// invalidates nothing else (tokens are stateless), which matches the
/// original logout-only lifecycle.
#[derive(Default)]
pub struct InMemoryTokenRevocationList {
    revoked: RwLock<HashSet<String>>,
}

impl InMemoryTokenRevocationList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenRevocationList for InMemoryTokenRevocationList {
    fn revoke(&self, jti: &str) {
        let mut revoked = self.revoked.write().unwrap_or_else(|e| e.into_inner());
        revoked.insert(jti.to_string());
    }

    fn is_revoked(&self, jti: &str) -> bool {
        let revoked = self.revoked.read().unwrap_or_else(|e| e.into_inner());
        revoked.contains(jti)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revocation_is_per_jti() {
        let list = InMemoryTokenRevocationList::new();

        assert!(!list.is_revoked("a"));
        list.revoke("a");
        assert!(list.is_revoked("a"));
        assert!(!list.is_revoked("b"));
    }

    #[test]
    fn test_revoking_twice_is_a_noop() {
        let list = InMemoryTokenRevocationList::new();

        list.revoke("a");
        list.revoke("a");

        assert!(list.is_revoked("a"));
    }
}
