use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as an absent field.
///
/// Pair with `#[serde(default)]` so both shapes land on `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
