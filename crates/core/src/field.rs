//! Presence-aware optional field for partial-update payloads.
//!
//! A plain `Option<T>` collapses "key absent" and "key set to `null`" into
//! the same `None`. [`Field`] keeps the two apart so the request boundary
//! can tell them apart if a caller ever needs to clear a value.
//!
//! Struct fields of this type must carry `#[serde(default)]` (or the
//! container must) so that an absent key becomes [`Field::Missing`].

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Key not present in the payload.
    Missing,
    /// Key present with an explicit `null`.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> Field<T> {
    /// The carried value, treating `Missing` and `Null` alike.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            Field::Missing | Field::Null => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            Field::Missing | Field::Null => None,
        }
    }

    /// `true` when the key appeared in the payload, even as `null`.
    pub fn is_present(&self) -> bool {
        !matches!(self, Field::Missing)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Value(value),
            None => Field::Null,
        })
    }
}
