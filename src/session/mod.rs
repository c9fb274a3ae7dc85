//! Session management for the portal
//!
//! - [`CredentialStore`] - persists the single bearer token
//! - [`Session`] - derives "is authenticated" and the `Authorization` header
//! - [`RedirectPolicy`] - clears the token and routes back to login

pub mod accessor;
pub mod redirect;
pub mod store;

pub use accessor::{AuthHeader, Session};
pub use redirect::{Navigator, RedirectPolicy, TerminalNavigator};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore, TOKEN_KEY, Token};
