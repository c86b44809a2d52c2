//! Liveness endpoint.

use http::StatusCode;
use serde::Serialize;

use crate::clock::{self, Clock};
use crate::cors::Cors;
use crate::request::Request;
use crate::response::Response;

use super::Handler;

/// Service identity reported in every health body.
const SERVICE: &str = "vidgate video api";

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
    timestamp: String,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    upload: &'static str,
    health: &'static str,
    list: &'static str,
}

/// Reports static liveness and service metadata. Cannot fail: any non-OPTIONS
/// method is answered identically with a 200.
pub struct HealthHandler<C> {
    clock: C,
    cors: Cors,
}

impl<C: Clock> HealthHandler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, cors: Cors::allow("GET, OPTIONS") }
    }
}

impl<C: Clock> Handler for HealthHandler<C> {
    fn handle(&self, req: &Request) -> Response {
        if let Some(preflight) = self.cors.preflight(req) {
            return preflight;
        }

        let body = HealthBody {
            status: "healthy",
            service: SERVICE,
            timestamp: clock::iso8601(self.clock.now()),
            endpoints: Endpoints { upload: "/upload", health: "/health", list: "/list" },
        };
        self.cors.apply(Response::json(StatusCode::OK, &body))
    }
}
