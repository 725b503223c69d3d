//! Lenient decoding of decimal columns.
//!
//! The backend serializes numeric columns either as JSON numbers or as
//! decimal strings (`"12.500"`), depending on the endpoint. Both decode to
//! `f64`; `null` and blank strings decode to zero.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

fn value_to_f64<E: serde::de::Error>(value: Value) -> Result<Option<f64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom(format!("number out of range: {}", n))),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| E::custom(format!("invalid decimal '{}': {}", s, e))),
        other => Err(E::custom(format!("expected a decimal, got {}", other))),
    }
}

pub mod lenient_f64 {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value_to_f64::<D::Error>(value)?.unwrap_or(0.0))
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }
}

pub mod lenient_f64_opt {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        value_to_f64::<D::Error>(value)
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_f64(*v),
            None => serializer.serialize_none(),
        }
    }
}

/// Parse a decimal string the way the invoice screen does: garbage is zero.
pub fn parse_decimal(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(0.0)
}
