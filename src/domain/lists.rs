//! Serde helper for optional list fields.
//!
//! A YAML key left without a value (`keywords:`) parses as `null`; such a
//! list reads as empty, the same as an absent key.

use serde::{Deserialize, Deserializer};

pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
