//! # vidgate
//!
//! The stateless handler core of a minimal video upload API: a health check,
//! a listing endpoint, and an upload endpoint, each a pure function from one
//! immutable request to one response. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The hosting platform owns routing, TLS, timeouts, and invocation
//! concurrency. vidgate owns what happens inside one invocation:
//!
//! - **CORS** — every response carries the permissive header triple; an
//!   `OPTIONS` preflight short-circuits before any business logic.
//! - **Validation** — the upload pipeline checks method, payload presence,
//!   and the 500 MB decoded-size ceiling, in that order, each failure mapped
//!   to a fixed status and wire message.
//! - **Simulated persistence** — there is no durable store. Uploads pass
//!   through a [`StorageBackend`] seam whose stock implementation synthesizes
//!   a URL and keeps nothing, so real storage can be injected later without
//!   touching validation.
//!
//! Handlers read no ambient state: wall-clock time arrives through the
//! [`Clock`] capability, which keeps every timestamp-bearing field
//! deterministic under test.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use vidgate::{
//!     HealthHandler, ListHandler, Router, Server, SimulatedStorage, SystemClock, UploadHandler,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .at("/health", HealthHandler::new(SystemClock))
//!         .at("/list", ListHandler::new(SystemClock, SimulatedStorage::default()))
//!         .at("/upload", UploadHandler::new(SystemClock, SimulatedStorage::default()));
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//! ```

mod clock;
mod cors;
mod error;
mod handlers;
mod request;
mod response;
mod router;
mod server;
mod storage;

pub use clock::{Clock, SystemClock};
pub use cors::Cors;
pub use error::{Error, UploadError};
pub use handlers::{
    Handler, HealthHandler, ListHandler, MAX_UPLOAD_BYTES, UploadHandler, VideoDescriptor,
};
pub use request::Request;
pub use response::Response;
pub use router::Router;
pub use server::Server;
pub use storage::{PutError, SimulatedStorage, StorageBackend};
