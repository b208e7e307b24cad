//! Serde helper functions for JSON body binding.
//!
//! These run at the binding boundary so a handler never sees a [`Todo`]
//! without a title.
//!
//! [`Todo`]: crate::todo::Todo

use serde::{de::Error as _, Deserialize, Deserializer};

/// Deserialize a required string, rejecting `null` and empty values.
///
/// A missing field is already rejected by serde as long as the field has no
/// `#[serde(default)]`.
pub fn deserialize_required_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(D::Error::custom("value is required and cannot be empty")),
    }
}

/// Deserialize a string, treating `null` as the empty string.
pub fn deserialize_string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}

/// Deserialize a bool, treating `null` as `false`.
pub fn deserialize_bool_or_default<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let b: Option<bool> = Option::deserialize(deserializer)?;
    Ok(b.unwrap_or_default())
}
