//! Incoming HTTP request type.

use http::{HeaderMap, Method};

/// An incoming HTTP request, as handed to a handler by the hosting platform.
///
/// Immutable once constructed. A handler sees the method, the headers, and an
/// optional textual body — it never owns the transport, and it never mutates
/// what it was given.
#[derive(Clone, Debug)]
pub struct Request {
    method: Method,
    headers: HeaderMap,
    body: Option<String>,
}

impl Request {
    pub fn new(method: Method, headers: HeaderMap, body: Option<String>) -> Self {
        Self { method, headers, body }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request body, if the transport delivered one.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Case-insensitive header lookup. Non-UTF-8 header values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
