//! Wall-clock capability.
//!
//! Handlers never read ambient time. They take a [`Clock`] at construction,
//! which keeps every timestamp-bearing field deterministic under test — a
//! fixed `DateTime<Utc>` is itself a `Clock`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A fixed instant is a clock that always reads that instant.
impl Clock for DateTime<Utc> {
    fn now(&self) -> DateTime<Utc> {
        *self
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g.
/// `2026-08-23T10:15:30.123Z` — the shape the wire format fixes for every
/// `timestamp` / `created_at` field.
pub(crate) fn iso8601(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso8601_uses_millis_and_zulu() {
        let t = Utc.with_ymd_and_hms(2026, 8, 23, 10, 15, 30).unwrap();
        assert_eq!(iso8601(t), "2026-08-23T10:15:30.000Z");
    }

    #[test]
    fn fixed_instant_acts_as_clock() {
        let t = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(t.now(), t);
    }
}
