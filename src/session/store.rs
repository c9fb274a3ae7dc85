//! Credential persistence
//!
//! A single bearer token lives under the fixed key [`TOKEN_KEY`]. The file
//! backend writes it as plain text next to the config file; the memory backend
//! keeps it in-process for tests and embedders.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::StorageError;

/// Fixed key (and file name) the token is stored under
pub const TOKEN_KEY: &str = "authToken";

/// Opaque bearer credential issued by the login endpoint.
///
/// No format validation is applied; the server is the only authority on
/// whether a token is valid.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Storage backend for the session token
pub trait CredentialStore: Send + Sync {
    /// Persist the token, replacing any previous value
    fn save(&self, token: &Token) -> Result<(), StorageError>;

    /// Read the token; `None` when it was never set or has been cleared
    fn load(&self) -> Result<Option<Token>, StorageError>;

    /// Remove the token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Token stored as a plain-text file named [`TOKEN_KEY`]
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store the token inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_KEY),
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn save(&self, token: &Token) -> Result<(), StorageError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        // Each save stages in its own file; readers see the old token or the new one
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(token.as_str().as_bytes())?;
        staged.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            staged
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }

        staged.persist(&self.path).map_err(|e| e.error)?;
        debug!("Saved session token to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<Token>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(Token(contents))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Cleared session token at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token storage
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<Token>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token
    pub fn with_token(token: impl Into<Token>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, token: &Token) -> Result<(), StorageError> {
        let mut slot = self.token.write().map_err(|_| StorageError::Poisoned)?;
        *slot = Some(token.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Token>, StorageError> {
        let slot = self.token.read().map_err(|_| StorageError::Poisoned)?;
        Ok(slot.clone())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut slot = self.token.write().map_err(|_| StorageError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}
