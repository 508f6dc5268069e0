//! Token expiry record

use serde::{Deserialize, Serialize};

/// Current time as Unix seconds
pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Validity window of an issued token, persisted next to the token itself
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenExpiryRecord {
    /// Unix timestamp the token was stored at
    pub issued_at: i64,
    /// Unix timestamp after which the token must not be used
    pub expires_at: i64,
}

impl TokenExpiryRecord {
    pub fn from_ttl(now: i64, ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            issued_at: now,
            expires_at: now.saturating_add(ttl),
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    /// Seconds left before expiry, zero once expired
    pub fn remaining(&self, now: i64) -> u64 {
        u64::try_from(self.expires_at.saturating_sub(now)).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_exactly_at_deadline() {
        let record = TokenExpiryRecord::from_ttl(1_000, 60);
        assert_eq!(record.expires_at, 1_060);
        assert!(!record.is_expired(1_059));
        assert!(record.is_expired(1_060));
        assert!(record.is_expired(2_000));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let record = TokenExpiryRecord::from_ttl(100, 30);
        assert_eq!(record.remaining(110), 20);
        assert_eq!(record.remaining(500), 0);
    }

    #[test]
    fn huge_ttl_does_not_overflow() {
        let record = TokenExpiryRecord::from_ttl(10, u64::MAX);
        assert_eq!(record.expires_at, i64::MAX);
        assert!(!record.is_expired(now_unix()));
    }

    #[test]
    fn serializes_as_plain_timestamps() {
        let record = TokenExpiryRecord {
            issued_at: 1,
            expires_at: 2,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"issued_at":1,"expires_at":2}"#
        );
    }
}
