//! Lenient scalar types for host-platform storage
//!
//! The host settings store keeps numeric fields loosely typed: a rate may
//! arrive as a number (`5`), a numeric string (`"5"`), or an empty string
//! meaning "not configured". `RateValue` accepts all of these so a vendor
//! with a sloppy settings bag still resolves to a usable split.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A commission rate or fee as stored by the host platform.
///
/// `None` means the field is absent or empty (not configured), which is
/// distinct from an explicit zero. Malformed or negative values coerce to
/// zero on read rather than failing the resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateValue(Option<f64>);

impl RateValue {
    pub fn new(value: f64) -> Self {
        Self(Some(value))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    /// Whether the field carries a configured value.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Numeric value, coercing absent, non-finite and negative inputs to zero.
    pub fn amount(&self) -> f64 {
        match self.0 {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => 0.0,
        }
    }
}

impl From<f64> for RateValue {
    fn from(value: f64) -> Self {
        Self(Some(value))
    }
}

impl Serialize for RateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(v) => serializer.serialize_f64(v),
            // Host convention: unset rates round-trip as empty strings
            None => serializer.serialize_str(""),
        }
    }
}

struct RateValueVisitor;

impl<'de> Visitor<'de> for RateValueVisitor {
    type Value = RateValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a numeric string, an empty string, or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RateValue, E> {
        Ok(RateValue(Some(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RateValue, E> {
        Ok(RateValue(Some(v as f64)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RateValue, E> {
        Ok(RateValue(Some(v as f64)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RateValue, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(RateValue(None));
        }
        // Non-numeric strings degrade to an explicit zero, not an error
        Ok(RateValue(Some(trimmed.parse::<f64>().unwrap_or(0.0))))
    }

    fn visit_none<E: de::Error>(self) -> Result<RateValue, E> {
        Ok(RateValue(None))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RateValue, E> {
        Ok(RateValue(None))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RateValue, D::Error> {
        deserializer.deserialize_any(RateValueVisitor)
    }
}

impl<'de> Deserialize<'de> for RateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RateValue, D::Error> {
        deserializer.deserialize_any(RateValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default)]
        rate: RateValue,
    }

    #[test]
    fn test_deserialize_number() {
        let h: Holder = serde_json::from_str(r#"{"rate": 5.5}"#).unwrap();
        assert!(h.rate.is_set());
        assert_eq!(h.rate.amount(), 5.5);
    }

    #[test]
    fn test_deserialize_numeric_string() {
        let h: Holder = serde_json::from_str(r#"{"rate": "10"}"#).unwrap();
        assert!(h.rate.is_set());
        assert_eq!(h.rate.amount(), 10.0);
    }

    #[test]
    fn test_empty_string_is_unset() {
        let h: Holder = serde_json::from_str(r#"{"rate": ""}"#).unwrap();
        assert!(!h.rate.is_set());
        assert_eq!(h.rate.amount(), 0.0);
    }

    #[test]
    fn test_missing_field_is_unset() {
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!h.rate.is_set());
    }

    #[test]
    fn test_garbage_string_coerces_to_zero() {
        let h: Holder = serde_json::from_str(r#"{"rate": "abc"}"#).unwrap();
        assert!(h.rate.is_set());
        assert_eq!(h.rate.amount(), 0.0);
    }

    #[test]
    fn test_negative_coerces_to_zero() {
        let h: Holder = serde_json::from_str(r#"{"rate": -3}"#).unwrap();
        assert_eq!(h.rate.amount(), 0.0);
    }

    #[test]
    fn test_null_is_unset() {
        let h: Holder = serde_json::from_str(r#"{"rate": null}"#).unwrap();
        assert!(!h.rate.is_set());
    }
}
