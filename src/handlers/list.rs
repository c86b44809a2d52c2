//! Listing endpoint.

use http::StatusCode;
use serde::Serialize;

use crate::clock::{self, Clock};
use crate::cors::Cors;
use crate::request::Request;
use crate::response::Response;
use crate::storage::StorageBackend;

use super::{Handler, VideoDescriptor};

/// The one asset the current deployment knows about. A real deployment would
/// enumerate the storage backend here instead.
const FIXTURE_FILENAME: &str = "video_example_1.mp4";
const FIXTURE_SIZE_MB: f64 = 25.4;

#[derive(Serialize)]
struct ListBody {
    success: bool,
    count: usize,
    videos: Vec<VideoDescriptor>,
}

/// Returns the fixed collection of known assets. Cannot fail: any non-OPTIONS
/// method is answered identically with a 200.
pub struct ListHandler<C, S> {
    clock: C,
    storage: S,
    cors: Cors,
}

impl<C: Clock, S: StorageBackend> ListHandler<C, S> {
    pub fn new(clock: C, storage: S) -> Self {
        Self { clock, storage, cors: Cors::allow("GET, OPTIONS") }
    }
}

impl<C: Clock, S: StorageBackend> Handler for ListHandler<C, S> {
    fn handle(&self, req: &Request) -> Response {
        if let Some(preflight) = self.cors.preflight(req) {
            return preflight;
        }

        let videos = vec![VideoDescriptor {
            filename: FIXTURE_FILENAME.to_owned(),
            url: self.storage.url_for(FIXTURE_FILENAME),
            size_mb: FIXTURE_SIZE_MB,
            created_at: clock::iso8601(self.clock.now()),
        }];
        let body = ListBody { success: true, count: videos.len(), videos };
        self.cors.apply(Response::json(StatusCode::OK, &body))
    }
}
