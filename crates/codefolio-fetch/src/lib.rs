//! Platform fetch adapters, one per supported platform, behind a single
//! HTTP client with bounded timeouts and per-platform base-URL overrides.

pub mod client;
pub mod endpoints;
pub mod error;
mod platforms;

pub use client::FetchClient;
pub use endpoints::Endpoints;
pub use error::{FetchError, UpstreamFailureKind};
