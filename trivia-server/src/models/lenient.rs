//! Lenient integer fields
//!
//! Browser clients post `<select>` values as strings, so integer fields in
//! request bodies accept either `3` or `"3"`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Deserialize an optional integer given as a JSON number or numeric string.
///
/// Use with `#[serde(default, deserialize_with = "...")]` so that an absent
/// field and an explicit `null` both become `None`.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(value)) => Ok(Some(value)),
        Some(IntOrString::Str(raw)) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got '{}'", raw))),
    }
}
