//! Lenient numeric input.
//!
//! Form fields arrive as free text and saved files may hold `null` or strings
//! where numbers belong. Anything that is not a finite number becomes `0`.

/// Parse a number from user-entered text, yielding `0.0` on failure.
pub fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

// Whole units, floored; negatives and junk count as none.
fn count_or_zero(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.floor().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Serde adapters for lenient fields (`#[serde(deserialize_with = ...)]`).
pub mod de {
    use serde::{Deserialize, Deserializer};

    use super::{coerce_number, count_or_zero, finite_or_zero};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(#[allow(dead_code)] serde::de::IgnoredAny),
    }

    /// Number, numeric string, or anything else (as `0.0`).
    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) => finite_or_zero(v),
            Raw::Text(s) => coerce_number(&s),
            Raw::Other(_) => 0.0,
        })
    }

    /// Like [`number`], but keeps "missing" distinct from zero.
    pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) if v.is_finite() => Some(v),
            Raw::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        })
    }

    /// Non-negative whole count, such as stock. Negative, fractional or
    /// non-numeric input is floored to a count, with `0` as the minimum.
    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) => count_or_zero(v),
            Raw::Text(s) => count_or_zero(coerce_number(&s)),
            Raw::Other(_) => 0,
        })
    }

    /// String, or empty for `null` and non-string values.
    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            _ => String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(coerce_number("12.5"), 12.5);
        assert_eq!(coerce_number("  3 "), 3.0);
        assert_eq!(coerce_number("-1"), -1.0);
    }

    #[test]
    fn junk_becomes_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "de::number")]
        n: f64,
        #[serde(default, deserialize_with = "de::optional_number")]
        o: Option<f64>,
        #[serde(default, deserialize_with = "de::text")]
        t: String,
        #[serde(default, deserialize_with = "de::count")]
        c: u32,
    }

    fn fields(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn lenient_fields_accept_anything() {
        let p = fields(r#"{"n": 4, "o": "2.5", "t": "baby-snuggle"}"#);
        assert_eq!(p.n, 4.0);
        assert_eq!(p.o, Some(2.5));
        assert_eq!(p.t, "baby-snuggle");

        let p = fields(r#"{"n": "oops", "o": null, "t": null}"#);
        assert_eq!(p.n, 0.0);
        assert_eq!(p.o, None);
        assert_eq!(p.t, "");

        let p = fields(r#"{"n": [1, 2], "o": {"x": 1}, "t": 7}"#);
        assert_eq!(p.n, 0.0);
        assert_eq!(p.o, None);
        assert_eq!(p.t, "");

        let p = fields("{}");
        assert_eq!(p.n, 0.0);
        assert_eq!(p.o, None);
        assert_eq!(p.c, 0);
    }

    #[test]
    fn counts_are_whole_and_never_negative() {
        assert_eq!(fields(r#"{"c": 3}"#).c, 3);
        assert_eq!(fields(r#"{"c": "3"}"#).c, 3);
        assert_eq!(fields(r#"{"c": 2.9}"#).c, 2);
        assert_eq!(fields(r#"{"c": -1}"#).c, 0);
        assert_eq!(fields(r#"{"c": "lots"}"#).c, 0);
        assert_eq!(fields(r#"{"c": null}"#).c, 0);
        assert_eq!(fields(r#"{"c": 1e12}"#).c, u32::MAX);
    }
}
