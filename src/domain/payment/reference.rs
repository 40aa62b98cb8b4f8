//! Payment reference generation.
//!
//! A reference looks like `cb_1718000000000_k3j9x0a2b`: a caller supplied
//! prefix, the epoch time in milliseconds, and a 9 character base36 suffix.
//! References are not persisted and nothing checks them for collisions.

use crate::error::ServiceError;
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PREFIX: &str = "cb";
pub const SUFFIX_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// An opaque identifier correlating a payment attempt with backend processing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaymentReference(String);

impl PaymentReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the timestamp segment.
    pub fn prefix(&self) -> &str {
        self.split().0
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.split().1.parse().unwrap_or_default()
    }

    pub fn suffix(&self) -> &str {
        self.split().2
    }

    // Only constructed through `generate_at` or `from_str`, so the shape holds.
    fn split(&self) -> (&str, &str, &str) {
        let (rest, suffix) = self.0.rsplit_once('_').unwrap_or(("", ""));
        let (prefix, millis) = rest.rsplit_once('_').unwrap_or(("", ""));
        (prefix, millis, suffix)
    }
}

impl fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PaymentReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl FromStr for PaymentReference {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| {
            ServiceError::InvalidRequest(format!("malformed payment reference '{}': {}", s, reason))
        };

        let (rest, suffix) = s.rsplit_once('_').ok_or_else(|| invalid("missing suffix"))?;
        let (prefix, millis) = rest
            .rsplit_once('_')
            .ok_or_else(|| invalid("missing timestamp"))?;

        if prefix.is_empty() {
            return Err(invalid("empty prefix"));
        }
        if millis.is_empty() || !millis.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("timestamp must be decimal digits"));
        }
        if suffix.len() != SUFFIX_LEN || !suffix.bytes().all(|b| BASE36.contains(&b)) {
            return Err(invalid("suffix must be 9 lowercase base36 characters"));
        }

        Ok(Self(s.to_string()))
    }
}

/// Produces `<prefix>_<epochMillis>_<suffix>` references.
#[derive(Debug, Clone)]
pub struct PaymentReferenceGenerator {
    prefix: String,
}

impl Default for PaymentReferenceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl PaymentReferenceGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// New reference using the configured prefix.
    pub fn generate(&self) -> PaymentReference {
        self.generate_with_prefix(&self.prefix)
    }

    /// New reference with an explicit prefix, stamped with the current time.
    pub fn generate_with_prefix(&self, prefix: &str) -> PaymentReference {
        let now = chrono::Utc::now().timestamp_millis();
        Self::generate_at(prefix, now, &mut rand::thread_rng())
    }

    pub fn generate_at<R: Rng>(prefix: &str, timestamp_ms: i64, rng: &mut R) -> PaymentReference {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        PaymentReference(format!("{}_{}_{}", prefix, timestamp_ms, suffix))
    }
}
