//! Outgoing HTTP response type.
//!
//! A [`Response`] is a plain value: status, headers, UTF-8 body. Handlers
//! build one and return it; the server adapter (or the hosting platform)
//! turns it into wire bytes. Nothing here touches a socket.

use http::StatusCode;
use serde::Serialize;

/// An outgoing HTTP response.
#[derive(Clone, Debug)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: String,
}

impl Response {
    /// `status` + a serialized JSON body (`content-type: application/json`).
    ///
    /// Serialization of the wire structs in this crate cannot fail; if a
    /// caller-supplied type does fail anyway, the response degrades to a 500
    /// with the standard failure envelope rather than panicking.
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(json) => Self {
                status,
                headers: vec![("content-type".to_owned(), "application/json".to_owned())],
                body: json,
            },
            Err(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                headers: vec![("content-type".to_owned(), "application/json".to_owned())],
                body: r#"{"success":false,"error":"response serialization failed"}"#.to_owned(),
            },
        }
    }

    /// Response with no body and no content type. Preflight answers use this.
    pub fn empty(status: StatusCode) -> Self {
        Self { status, headers: Vec::new(), body: String::new() }
    }

    /// Appends a header. Returns `self` so headers chain naturally.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the response, yielding the body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Case-insensitive header lookup; first match wins.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
