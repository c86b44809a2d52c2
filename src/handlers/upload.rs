//! Upload endpoint: the validation pipeline and simulated persistence.

use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::{Method, StatusCode};
use serde::Serialize;

use crate::clock::{self, Clock};
use crate::cors::Cors;
use crate::error::UploadError;
use crate::request::Request;
use crate::response::Response;
use crate::storage::StorageBackend;

use super::{ErrorBody, Handler};

/// Upload ceiling: 500 MB in 1024-based multiples. The 413 message divides
/// this back down, so the enforced threshold and the reported one stay in
/// lock-step.
pub const MAX_UPLOAD_BYTES: usize = 500 * 1024 * 1024;

const MIB: f64 = (1024 * 1024) as f64;

#[derive(Serialize)]
struct UploadBody {
    success: bool,
    message: &'static str,
    data: UploadReceipt,
}

/// Wire shape of one accepted upload.
#[derive(Serialize)]
struct UploadReceipt {
    filename: String,
    url: String,
    size_mb: f64,
    timestamp: String,
}

/// Validates an inbound upload, decodes the base64 payload, enforces the size
/// ceiling, derives a timestamp-based filename, and hands the bytes to the
/// storage backend.
pub struct UploadHandler<C, S> {
    clock: C,
    storage: S,
    cors: Cors,
}

impl<C: Clock, S: StorageBackend> UploadHandler<C, S> {
    pub fn new(clock: C, storage: S) -> Self {
        Self { clock, storage, cors: Cors::allow("POST, OPTIONS") }
    }

    /// The validation pipeline, in fixed order: method, presence, decode,
    /// size, then identifier synthesis and the storage write. The size check
    /// runs before any filename work, so an oversized payload never reaches
    /// the storage seam.
    fn accept(&self, req: &Request) -> Result<UploadReceipt, UploadError> {
        if req.method() != Method::POST {
            return Err(UploadError::MethodNotAllowed);
        }

        let encoded = match req.body() {
            Some(body) if !body.is_empty() => body,
            _ => return Err(UploadError::MissingPayload),
        };

        // Encoders routinely wrap base64 (GNU `base64` at 76 columns, with a
        // trailing newline). The upstream decoder tolerated that, so strip
        // ASCII whitespace before the strict decode. A payload malformed
        // beyond that surfaces as Internal (500), not as a 4xx: the contract
        // treats decoding as infallible and reports anything else as an
        // unexpected processing failure.
        let encoded: Cow<'_, str> = if encoded.bytes().any(|b| b.is_ascii_whitespace()) {
            Cow::Owned(encoded.split_whitespace().collect())
        } else {
            Cow::Borrowed(encoded)
        };
        let bytes = BASE64.decode(encoded.as_bytes())?;

        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::PayloadTooLarge);
        }

        let now = self.clock.now();
        let filename = derive_filename(now.timestamp_millis());
        let url = self
            .storage
            .put(&filename, &bytes)
            .map_err(|e| UploadError::Internal(e.to_string()))?;

        Ok(UploadReceipt {
            filename,
            url,
            size_mb: round2(bytes.len() as f64 / MIB),
            timestamp: clock::iso8601(now),
        })
    }
}

impl<C: Clock, S: StorageBackend> Handler for UploadHandler<C, S> {
    fn handle(&self, req: &Request) -> Response {
        if let Some(preflight) = self.cors.preflight(req) {
            return preflight;
        }

        match self.accept(req) {
            Ok(receipt) => self.cors.apply(Response::json(
                StatusCode::OK,
                &UploadBody {
                    success: true,
                    message: "Video uploaded successfully",
                    data: receipt,
                },
            )),
            Err(e) => self.cors.apply(Response::json(
                e.status(),
                &ErrorBody { success: false, error: e.to_string() },
            )),
        }
    }
}

/// `video_{millis}_{hash8}.mp4`, where `hash8` is the first 8 hex characters
/// of `md5("video_{millis}")`.
///
/// Filenames derive from the upload instant, not the content: identical bytes
/// uploaded at two different times get two different names.
fn derive_filename(epoch_millis: i64) -> String {
    let digest = format!("{:x}", md5::compute(format!("video_{epoch_millis}")));
    format!("video_{epoch_millis}_{}.mp4", &digest[..8])
}

/// Rounds to two decimal places for the `size_mb` wire field.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_shape_is_millis_then_hash8() {
        let name = derive_filename(1_724_400_000_000);
        let stem = name.strip_suffix(".mp4").expect("mp4 suffix");
        let rest = stem.strip_prefix("video_").expect("video_ prefix");
        let (millis, hash) = rest.split_once('_').expect("millis_hash");

        assert_eq!(millis, "1724400000000");
        assert_eq!(hash.len(), 8);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn filename_is_deterministic_for_a_timestamp() {
        assert_eq!(derive_filename(42), derive_filename(42));
        assert_ne!(derive_filename(42), derive_filename(43));
    }

    #[test]
    fn size_rounds_to_two_decimals() {
        assert_eq!(round2(25.3999), 25.4);
        assert_eq!(round2(10.0 / MIB), 0.0);
        assert_eq!(round2(12.345_678), 12.35);
    }
}
