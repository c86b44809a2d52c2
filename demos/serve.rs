//! Minimal vidgate example — the three stock handlers behind the embedded server.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example serve
//!
//! Try:
//!   curl http://localhost:3000/health
//!   curl http://localhost:3000/list
//!   base64 < some_clip.mp4 | curl -X POST http://localhost:3000/upload \
//!        -H 'content-type: video/mp4' --data-binary @-
//!   curl -X OPTIONS -i http://localhost:3000/upload

use vidgate::{
    HealthHandler, ListHandler, Router, Server, SimulatedStorage, SystemClock, UploadHandler,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .at("/health", HealthHandler::new(SystemClock))
        .at("/list", ListHandler::new(SystemClock, SimulatedStorage::default()))
        .at("/upload", UploadHandler::new(SystemClock, SimulatedStorage::default()));

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}
