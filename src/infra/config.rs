//! Centralized configuration (environment variables + defaults).

use crate::domain::payment::reference::DEFAULT_PREFIX;
use crate::domain::payment::validator::MINIMUM_PAYABLE;
use crate::error::{Result, ServiceError};
use rust_decimal::Decimal;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "medlease_payments=info,tower_http=info";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub reference_prefix: String,
    pub minimum_amount: Decimal,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            reference_prefix: DEFAULT_PREFIX.to_string(),
            minimum_amount: MINIMUM_PAYABLE,
        }
    }
}

impl ServiceConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = SocketAddr::from_str(bind_addr.trim()).map_err(|e| {
            config_error(
                "BIND_ADDR",
                format!("'{}' is not a socket address: {}", bind_addr, e),
            )
        })?;

        let reference_prefix = lookup("PAYMENT_REFERENCE_PREFIX")
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        check_prefix(&reference_prefix)
            .map_err(|reason| config_error("PAYMENT_REFERENCE_PREFIX", reason))?;

        let minimum_amount = match lookup("MIN_PAYMENT_AMOUNT") {
            Some(raw) => Decimal::from_str(raw.trim()).map_err(|e| {
                config_error(
                    "MIN_PAYMENT_AMOUNT",
                    format!("'{}' is not a decimal: {}", raw, e),
                )
            })?,
            None => MINIMUM_PAYABLE,
        };
        if minimum_amount <= Decimal::ZERO {
            return Err(config_error("MIN_PAYMENT_AMOUNT", "must be greater than zero"));
        }

        Ok(Self {
            bind_addr,
            reference_prefix,
            minimum_amount,
        })
    }
}

/// Prefixes end up inside payment references, which the backend splits on `_`.
/// Returns the reason a prefix is unusable.
pub fn check_prefix(prefix: &str) -> std::result::Result<(), String> {
    if prefix.is_empty() {
        return Err("prefix cannot be empty".to_string());
    }
    if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(format!(
            "prefix '{}' may only contain letters, digits and '-'",
            prefix
        ));
    }
    Ok(())
}

fn config_error(key: &str, reason: impl Into<String>) -> ServiceError {
    ServiceError::Config {
        key: key.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.reference_prefix, "cb");
        assert_eq!(config.minimum_amount, dec!(1));
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1:8081"),
            ("PAYMENT_REFERENCE_PREFIX", "mpesa"),
            ("MIN_PAYMENT_AMOUNT", "10.50"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8081");
        assert_eq!(config.reference_prefix, "mpesa");
        assert_eq!(config.minimum_amount, dec!(10.50));
    }

    #[test]
    fn test_invalid_values() {
        let bad_addr = ServiceConfig::from_lookup(lookup_from(&[("BIND_ADDR", "nowhere")]));
        assert!(
            matches!(bad_addr, Err(ServiceError::Config { ref key, .. }) if key == "BIND_ADDR")
        );

        let bad_prefix =
            ServiceConfig::from_lookup(lookup_from(&[("PAYMENT_REFERENCE_PREFIX", "cb_x")]));
        assert!(bad_prefix.is_err());

        let empty_prefix =
            ServiceConfig::from_lookup(lookup_from(&[("PAYMENT_REFERENCE_PREFIX", "  ")]));
        assert!(empty_prefix.is_err());

        let zero_min = ServiceConfig::from_lookup(lookup_from(&[("MIN_PAYMENT_AMOUNT", "0")]));
        assert!(zero_min.is_err());

        let junk_min = ServiceConfig::from_lookup(lookup_from(&[("MIN_PAYMENT_AMOUNT", "one")]));
        assert!(junk_min.is_err());
    }
}
