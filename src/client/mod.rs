//! UASD portal API client
//!
//! Layers, bottom up:
//! - [`Transport`] - sends raw HTTP (`reqwest` in production, a mock in tests)
//! - [`AuthenticatedClient`] - attaches the session token and classifies outcomes
//! - [`Shape`] - per-endpoint envelope decoding
//! - [`PortalApi`] - typed endpoint methods

pub mod envelope;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod portal;
pub mod request;
pub mod transport;

pub use envelope::Shape;
pub use portal::{API_BASE_URL, PortalApi, PortalClient};
pub use request::{AuthenticatedClient, Rejection, RequestOutcome};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportError};
