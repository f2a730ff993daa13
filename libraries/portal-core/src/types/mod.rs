//! Wire types.
//!
//! Each module holds both the public DTOs returned to the caller and the
//! private shapes spoken by the matching upstream service. Upstream shapes
//! are lenient: absent or `null` collections deserialize as empty.

mod connection;
mod content;
mod goal;
mod ids;
mod playlist;
mod profile;
mod tnc;

pub use connection::*;
pub use content::*;
pub use goal::*;
pub use ids::UserId;
pub use playlist::*;
pub use profile::*;
pub use tnc::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an absent or `null` sequence as an empty `Vec`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Keep a present field even when it is `null`; only an absent field is `None`
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Loose truthiness of an upstream JSON value.
///
/// Upstream services signal "set" with any non-empty value, so `null`,
/// `false`, `0` and `""` all count as unset.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
