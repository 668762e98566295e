use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Coerce a raw amount field into a number. Anything that does not parse
/// as a finite number becomes 0; an empty field is 0 as well.
pub fn coerce(raw: &str) -> f64 {
    finite_or_zero(raw.trim().parse().unwrap_or(0.0))
}

fn finite_or_zero(val: f64) -> f64 {
    if val.is_finite() {
        val
    } else {
        0.0
    }
}

struct LenientAmount;

impl<'de> Visitor<'de> for LenientAmount {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(finite_or_zero(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        Ok(coerce(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<f64, D::Error> {
        d.deserialize_any(LenientAmount)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<f64, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<f64, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }
}

/// `deserialize_with` helper for amount fields coming from an external
/// source: accepts numbers, numeric strings, null, and degrades everything
/// else to 0 instead of failing the whole snapshot.
pub fn lenient<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    d.deserialize_any(LenientAmount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient")]
        amount: f64,
    }

    fn parse(json: &str) -> f64 {
        serde_json::from_str::<Row>(json).unwrap().amount
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerce("500"), 500.0);
        assert_eq!(coerce(" 12.5 "), 12.5);
        assert_eq!(coerce(""), 0.0);
        assert_eq!(coerce("abc"), 0.0);
        assert_eq!(coerce("1,000"), 0.0);
        assert_eq!(coerce("NaN"), 0.0);
        assert_eq!(coerce("inf"), 0.0);
    }

    #[test]
    fn test_lenient_accepts_numbers_and_strings() {
        assert_eq!(parse(r#"{"amount": 400}"#), 400.0);
        assert_eq!(parse(r#"{"amount": 99.5}"#), 99.5);
        assert_eq!(parse(r#"{"amount": "250"}"#), 250.0);
    }

    #[test]
    fn test_lenient_degrades_to_zero() {
        assert_eq!(parse(r#"{"amount": "oops"}"#), 0.0);
        assert_eq!(parse(r#"{"amount": null}"#), 0.0);
        assert_eq!(parse(r#"{"amount": true}"#), 0.0);
        assert_eq!(parse(r#"{"amount": [1, 2]}"#), 0.0);
        assert_eq!(parse(r#"{"amount": {"x": 1}}"#), 0.0);
        assert_eq!(parse(r#"{}"#), 0.0);
    }
}
