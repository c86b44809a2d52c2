//! The three request handlers and their shared wire types.
//!
//! Each handler is a pure function of the request plus its injected
//! collaborators (clock, storage). There is no shared mutable state between
//! invocations: the hosting platform may run any number of them concurrently.

mod health;
mod list;
mod upload;

pub use health::HealthHandler;
pub use list::ListHandler;
pub use upload::{MAX_UPLOAD_BYTES, UploadHandler};

use serde::Serialize;

use crate::request::Request;
use crate::response::Response;

/// A stateless request handler: one immutable request in, one response out.
///
/// Method dispatch (including 405s) and the CORS preflight short-circuit
/// belong to the handler itself — the router routes by path only, matching
/// the contract of a platform-managed router.
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, req: &Request) -> Response;
}

/// Wire shape of one (real or simulated) uploaded asset, as the list
/// endpoint reports it. Ephemeral: constructed per response, never persisted.
#[derive(Clone, Debug, Serialize)]
pub struct VideoDescriptor {
    pub filename: String,
    pub url: String,
    pub size_mb: f64,
    pub created_at: String,
}

/// Wire shape of every failure body.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub success: bool,
    pub error: String,
}
