//! Permissive cross-origin policy.
//!
//! Every handler response — success, failure, or preflight — carries the same
//! three headers; only the allowed-methods list varies per handler. The
//! preflight short-circuit runs before any business logic, so an `OPTIONS`
//! probe can never trip validation.

use http::{Method, StatusCode};

use crate::request::Request;
use crate::response::Response;

/// The cross-origin policy for one handler.
#[derive(Clone, Copy, Debug)]
pub struct Cors {
    allow_methods: &'static str,
}

impl Cors {
    /// Policy allowing the given methods, e.g. `Cors::allow("GET, OPTIONS")`.
    /// The list is echoed verbatim in `access-control-allow-methods`.
    pub const fn allow(methods: &'static str) -> Self {
        Self { allow_methods: methods }
    }

    /// The header triple attached to every response under this policy.
    pub fn headers(&self) -> [(&'static str, &'static str); 3] {
        [
            ("access-control-allow-origin", "*"),
            ("access-control-allow-headers", "Content-Type"),
            ("access-control-allow-methods", self.allow_methods),
        ]
    }

    /// Answers a browser preflight: `OPTIONS` → 200, empty body, policy
    /// headers only. Returns `None` for every other method.
    pub fn preflight(&self, req: &Request) -> Option<Response> {
        (req.method() == Method::OPTIONS).then(|| self.apply(Response::empty(StatusCode::OK)))
    }

    /// Attaches the policy headers to `resp`.
    pub fn apply(&self, resp: Response) -> Response {
        self.headers()
            .into_iter()
            .fold(resp, |resp, (name, value)| resp.header(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;

    fn req(method: Method) -> Request {
        Request::new(method, HeaderMap::new(), None)
    }

    #[test]
    fn preflight_short_circuits_options() {
        let cors = Cors::allow("POST, OPTIONS");
        let resp = cors.preflight(&req(Method::OPTIONS)).expect("preflight response");

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.body().is_empty());
        assert_eq!(resp.header_value("access-control-allow-origin"), Some("*"));
        assert_eq!(resp.header_value("access-control-allow-headers"), Some("Content-Type"));
        assert_eq!(resp.header_value("access-control-allow-methods"), Some("POST, OPTIONS"));
    }

    #[test]
    fn non_options_passes_through() {
        let cors = Cors::allow("GET, OPTIONS");
        assert!(cors.preflight(&req(Method::GET)).is_none());
        assert!(cors.preflight(&req(Method::POST)).is_none());
    }

    #[test]
    fn apply_attaches_full_header_set() {
        let cors = Cors::allow("GET, OPTIONS");
        let resp = cors.apply(Response::empty(StatusCode::OK));
        for (name, value) in cors.headers() {
            assert_eq!(resp.header_value(name), Some(value));
        }
    }
}
