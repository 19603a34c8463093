//! Token sourcing for privileged operations.

use std::sync::RwLock;

use lexnugget_client::BearerToken;

/// Source of the current access token.
///
/// Looked up at the start of each privileged operation and never cached
/// across operations, so a token cleared mid-session takes effect on the
/// next action rather than the current one.
pub trait TokenStore {
    fn access_token(&self) -> Option<BearerToken>;
}

/// In-memory token store for the CLI and for tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<BearerToken>>,
}

impl MemoryTokenStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_token(token: BearerToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }

    pub fn set(&self, token: BearerToken) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<BearerToken> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_token_is_gone_on_next_read() {
        let store = MemoryTokenStore::with_token(BearerToken::new("tok123"));
        assert!(store.access_token().is_some());
        store.clear();
        assert!(store.access_token().is_none());
    }
}
