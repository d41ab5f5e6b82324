use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Decodes a field that the API may send as `null` or in a shape that changed between
/// API versions. Anything that does not fit `T` becomes `T::default()`.
///
/// Pair with `#[serde(default)]` so that a missing key is also covered.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Decodes a list element by element. An element that does not fit `T` becomes
/// `T::default()` in its original position; a non-array value becomes an empty list.
///
/// Pair with `#[serde(default)]` so that a missing key is also covered.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .map(|item| T::deserialize(item).unwrap_or_default())
        .collect())
}

/// `skip_serializing_if` predicate for optional string fields that should be omitted when
/// unset or empty.
pub fn is_none_or_empty(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
