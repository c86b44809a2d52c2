//! Error types.

use std::fmt;

use http::StatusCode;

use crate::handlers::MAX_UPLOAD_BYTES;

/// Everything that can stop an upload short of the success envelope.
///
/// Each variant maps to exactly one status code and one wire message; the
/// checks that produce them run in a fixed order, so the first failure is the
/// only one reported. `Internal` exposes the underlying message verbatim —
/// a compatibility contract inherited from the original deployment, not a
/// pattern to copy into services with stricter disclosure rules.
#[derive(Debug)]
pub enum UploadError {
    /// Any method but `POST`, after the preflight short-circuit.
    MethodNotAllowed,
    /// Absent or empty request body.
    MissingPayload,
    /// Decoded payload exceeds [`MAX_UPLOAD_BYTES`].
    PayloadTooLarge,
    /// Base64 decoding or any other unexpected processing failure.
    Internal(String),
}

impl UploadError {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingPayload => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotAllowed => f.write_str("Method not allowed"),
            Self::MissingPayload => f.write_str("No video data received"),
            // Derived from the enforced ceiling so message and check cannot
            // drift apart.
            Self::PayloadTooLarge => {
                write!(f, "File too large. Max: {}MB", MAX_UPLOAD_BYTES / (1024 * 1024))
            }
            Self::Internal(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for UploadError {}

impl From<base64::DecodeError> for UploadError {
    fn from(e: base64::DecodeError) -> Self {
        Self::Internal(e.to_string())
    }
}

/// The error type returned by the embedded server's fallible operations.
///
/// Handler-level failures are expressed as HTTP [`Response`](crate::Response)
/// values, never as `Error`s. This type surfaces infrastructure failures:
/// binding to a port or accepting a connection.
#[derive(Debug)]
pub struct Error(std::io::Error);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "io: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_taxonomy() {
        assert_eq!(UploadError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(UploadError::MissingPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(UploadError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(UploadError::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn wire_messages_are_exact() {
        assert_eq!(UploadError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(UploadError::MissingPayload.to_string(), "No video data received");
        assert_eq!(UploadError::PayloadTooLarge.to_string(), "File too large. Max: 500MB");
        assert_eq!(UploadError::Internal("boom".into()).to_string(), "boom");
    }

    #[test]
    fn decode_errors_surface_as_internal() {
        use base64::Engine;
        let err = base64::engine::general_purpose::STANDARD
            .decode("!!!")
            .unwrap_err();
        let wrapped = UploadError::from(err);
        assert_eq!(wrapped.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!wrapped.to_string().is_empty());
    }
}
