//! Serde encoding for `f64` that survives NaN and infinity
//!
//! Human-readable formats such as JSON have no literal for non-finite
//! numbers, so those are written as the strings `"NaN"`, `"inf"` and
//! `"-inf"`. Finite values stay plain numbers. Binary formats carry the raw
//! `f64` unchanged.
//!
//! Usable as `#[serde(with = "crate::serde_float")]` on `f64` fields.

use core::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NAN: &str = "NaN";
const INF: &str = "inf";
const NEG_INF: &str = "-inf";

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = *value;
    if value.is_finite() || !serializer.is_human_readable() {
        serializer.serialize_f64(value)
    } else if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if value > 0.0 {
        serializer.serialize_str(INF)
    } else {
        serializer.serialize_str(NEG_INF)
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    if deserializer.is_human_readable() {
        deserializer.deserialize_any(FloatVisitor)
    } else {
        f64::deserialize(deserializer)
    }
}

/// Newtype carrying the encoding into sequences and options
#[derive(Clone, Copy, Debug)]
pub struct Float(pub f64);

impl Serialize for Float {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Float {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Float)
    }
}

/// Serializes a slice of `f64` as a sequence of [`Float`]
pub struct FloatSlice<'a>(pub &'a [f64]);

impl Serialize for FloatSlice<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter().map(|&x| Float(x)))
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a number or one of \"{}\", \"{}\", \"{}\"", NAN, INF, NEG_INF)
    }

    fn visit_f64<E>(self, v: f64) -> Result<f64, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_i64<E>(self, v: i64) -> Result<f64, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_u64<E>(self, v: u64) -> Result<f64, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_str<E>(self, v: &str) -> Result<f64, E>
    where
        E: de::Error,
    {
        match v {
            NAN => Ok(f64::NAN),
            INF => Ok(f64::INFINITY),
            NEG_INF => Ok(f64::NEG_INFINITY),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Reading {
        #[serde(with = "crate::serde_float")]
        value: f64,
    }

    fn round_trip(value: f64) -> f64 {
        let json = serde_json::to_string(&Reading { value }).unwrap();
        serde_json::from_str::<Reading>(&json).unwrap().value
    }

    #[test]
    fn test_non_finite_as_strings() {
        assert_eq!(
            serde_json::to_string(&Reading { value: f64::NAN }).unwrap(),
            r#"{"value":"NaN"}"#
        );
        assert_eq!(
            serde_json::to_string(&Reading { value: f64::NEG_INFINITY }).unwrap(),
            r#"{"value":"-inf"}"#
        );
        assert!(round_trip(f64::NAN).is_nan());
        assert_eq!(round_trip(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_trip(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_finite_stay_numbers() {
        assert_eq!(
            serde_json::to_string(&Reading { value: 1.5 }).unwrap(),
            r#"{"value":1.5}"#
        );
        assert_eq!(round_trip(-2.25), -2.25);
        let parsed: Reading = serde_json::from_str(r#"{"value":3}"#).unwrap();
        assert_eq!(parsed.value, 3.0);
    }

    #[test]
    fn test_unknown_string_rejected() {
        assert!(serde_json::from_str::<Reading>(r#"{"value":"nope"}"#).is_err());
    }
}
