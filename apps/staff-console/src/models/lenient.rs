//! Lenient deserializers for server records.
//!
//! The server serializes SQL decimals as strings (`"72.50"`) and most other
//! numbers as JSON numbers, sometimes for the same field across endpoints.
//! Nullable columns the console treats as plain text or as an enum with a
//! default go through [`null_as_default`].

use serde::{Deserialize, Deserializer};

/// Reads `null` as `T::default()`. Pair with `#[serde(default)]` so a missing
/// key behaves the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Float(f64),
    Text(String),
}

impl NumberOrString {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Float(n) => Ok(n),
            NumberOrString::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("expected a number, got {s:?}"))),
        }
    }
}

pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_f64()
}

pub fn option_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => value.into_f64().map(Some),
    }
}

/// Whole-number counts; `"10.00"` is accepted and truncated.
pub fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    f64_lenient(deserializer).map(|n| n as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Labelled {
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
    }

    #[test]
    fn test_null_or_missing_text_reads_as_empty() {
        let l: Labelled = serde_json::from_str(r#"{"label": null}"#).unwrap();
        assert_eq!(l.label, "");
        let l: Labelled = serde_json::from_str("{}").unwrap();
        assert_eq!(l.label, "");
        let l: Labelled = serde_json::from_str(r#"{"label": "x"}"#).unwrap();
        assert_eq!(l.label, "x");
    }

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "f64_lenient")]
        score: f64,
        #[serde(default, deserialize_with = "option_f64_lenient")]
        optional: Option<f64>,
        #[serde(deserialize_with = "i64_lenient")]
        count: i64,
    }

    #[test]
    fn test_accepts_numbers() {
        let s: Sample =
            serde_json::from_str(r#"{"score": 72.5, "optional": 3, "count": 10}"#).unwrap();
        assert_eq!(s.score, 72.5);
        assert_eq!(s.optional, Some(3.0));
        assert_eq!(s.count, 10);
    }

    #[test]
    fn test_accepts_decimal_strings() {
        let s: Sample =
            serde_json::from_str(r#"{"score": "72.50", "optional": "0.00", "count": "10.00"}"#)
                .unwrap();
        assert_eq!(s.score, 72.5);
        assert_eq!(s.optional, Some(0.0));
        assert_eq!(s.count, 10);
    }

    #[test]
    fn test_optional_null_or_missing_is_none() {
        let s: Sample = serde_json::from_str(r#"{"score": 1, "optional": null, "count": 1}"#).unwrap();
        assert_eq!(s.optional, None);
        let s: Sample = serde_json::from_str(r#"{"score": 1, "count": 1}"#).unwrap();
        assert_eq!(s.optional, None);
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        let result = serde_json::from_str::<Sample>(r#"{"score": "high", "count": 1}"#);
        assert!(result.is_err());
    }
}
