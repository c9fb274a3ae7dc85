//! Derived session state

use std::sync::Arc;

use super::store::{CredentialStore, Token};
use crate::error::StorageError;

/// `Authorization` header built from the stored token
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    value: String,
}

impl AuthHeader {
    pub const NAME: &'static str = "Authorization";

    fn bearer(token: &Token) -> Self {
        Self {
            value: format!("Bearer {}", token.as_str()),
        }
    }

    /// Header as a `(name, value)` pair
    pub fn pair(&self) -> (&'static str, &str) {
        (Self::NAME, &self.value)
    }
}

impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthHeader(Bearer ***)")
    }
}

/// Read-only view over the credential store.
///
/// Nothing is cached: every call goes back to the store, so a token cleared
/// by another collaborator is observed immediately.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Stored token, if any
    pub fn token(&self) -> Result<Option<Token>, StorageError> {
        self.store.load()
    }

    /// True iff a non-empty token is stored
    pub fn is_authenticated(&self) -> Result<bool, StorageError> {
        Ok(self.usable_token()?.is_some())
    }

    /// Header to attach to authenticated calls; `None` means the call must not be made
    pub fn auth_header(&self) -> Result<Option<AuthHeader>, StorageError> {
        Ok(self.usable_token()?.as_ref().map(AuthHeader::bearer))
    }

    fn usable_token(&self) -> Result<Option<Token>, StorageError> {
        Ok(self.store.load()?.filter(|token| !token.is_empty()))
    }
}
