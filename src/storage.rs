//! Storage capability.
//!
//! The current deployment has no durable store, but the handlers must not
//! hardcode that fact — validation logic stays identical when a real backend
//! arrives. [`SimulatedStorage`] keeps the seam honest: it accepts the bytes,
//! synthesizes the public URL, and drops the payload on the floor.

use std::error::Error;

/// Failure surface of a storage write. The simulated backend never fails;
/// real backends wrap their own error types here.
pub type PutError = Box<dyn Error + Send + Sync + 'static>;

/// Destination for uploaded assets.
pub trait StorageBackend: Send + Sync + 'static {
    /// Stores `bytes` under `filename` and returns the public URL the object
    /// is served from.
    fn put(&self, filename: &str, bytes: &[u8]) -> Result<String, PutError>;

    /// Public URL for a named object, whether or not it exists.
    fn url_for(&self, filename: &str) -> String;
}

/// Default public base for synthesized URLs.
const DEFAULT_BASE_URL: &str = "https://vidgate.example";

/// A backend that stores nothing.
///
/// `put` succeeds unconditionally and the returned URL is synthesized, not
/// backed by a retrievable object.
#[derive(Clone, Debug)]
pub struct SimulatedStorage {
    base_url: String,
}

impl SimulatedStorage {
    /// Backend rooted at `base_url`; a trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl Default for SimulatedStorage {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl StorageBackend for SimulatedStorage {
    fn put(&self, filename: &str, _bytes: &[u8]) -> Result<String, PutError> {
        Ok(self.url_for(filename))
    }

    fn url_for(&self, filename: &str) -> String {
        format!("{}/videos/{filename}", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_under_videos() {
        let storage = SimulatedStorage::new("https://cdn.example");
        assert_eq!(storage.url_for("a.mp4"), "https://cdn.example/videos/a.mp4");
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        let storage = SimulatedStorage::new("https://cdn.example/");
        assert_eq!(storage.url_for("a.mp4"), "https://cdn.example/videos/a.mp4");
    }

    #[test]
    fn put_discards_bytes_and_returns_url() {
        let storage = SimulatedStorage::default();
        let url = storage.put("clip.mp4", b"not really a video").unwrap();
        assert_eq!(url, "https://vidgate.example/videos/clip.mp4");
    }
}
