//! Sending the user back to login when the session is missing or rejected

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use colored::Colorize;
use log::{debug, warn};

use super::store::CredentialStore;
use crate::client::RequestOutcome;
use crate::error::StorageError;

/// Presents the login entry point to the user
pub trait Navigator: Send + Sync {
    fn to_login(&self);
}

/// Prints the login prompt at most once per instance.
///
/// [`Navigator::to_login`] only marks the prompt as pending; it is written on
/// the next [`TerminalNavigator::flush`], after any spinner has been cleared.
pub struct TerminalNavigator {
    shown: AtomicBool,
    pending: AtomicBool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalNavigator {
    /// Navigator writing to stderr
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            shown: AtomicBool::new(false),
            pending: AtomicBool::new(false),
            out: Mutex::new(out),
        }
    }

    /// Write the pending prompt, if any
    pub fn flush(&self) {
        if !self.pending.swap(false, Ordering::SeqCst) {
            return;
        }
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let written = writeln!(
            out,
            "{} Your session has ended. Run {} to sign in again.",
            "→".yellow(),
            "uasd login".cyan()
        );
        if let Err(e) = written {
            debug!("Failed to print login prompt: {}", e);
        }
    }
}

impl Default for TerminalNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TerminalNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalNavigator")
            .field("shown", &self.shown)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Navigator for TerminalNavigator {
    fn to_login(&self) {
        if !self.shown.swap(true, Ordering::SeqCst) {
            self.pending.store(true, Ordering::SeqCst);
        }
    }
}

/// In-memory writer for checking what a [`TerminalNavigator`] printed
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl CapturedOutput {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[cfg(test)]
impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Clears the stored token and routes the user to login
#[derive(Clone)]
pub struct RedirectPolicy {
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
}

impl RedirectPolicy {
    pub fn new(store: Arc<dyn CredentialStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Whether an outcome should end the session
    pub fn should_redirect(outcome: &RequestOutcome) -> bool {
        match outcome {
            RequestOutcome::Unauthenticated => true,
            RequestOutcome::ServerRejected(rejection) => rejection.is_auth_failure(),
            _ => false,
        }
    }

    /// Clear the store, then signal navigation exactly once.
    ///
    /// Navigation happens even if clearing fails; the storage error is
    /// returned afterwards.
    pub fn handle_unauthenticated(&self) -> Result<(), StorageError> {
        let cleared = self.store.clear();
        if let Err(ref e) = cleared {
            warn!("Failed to clear session token: {}", e);
        }
        debug!("Redirecting to login");
        self.navigator.to_login();
        cleared
    }
}
