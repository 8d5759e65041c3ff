//! Helpers for partial-update DTOs.
//!
//! Nullable columns are patched through `Option<Option<T>>`:
//! absent key → `None` (leave as is), `null` → `Some(None)` (clear), value → `Some(Some(v))`.
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct UpdateTask {
//!     #[serde(default, deserialize_with = "core_crud::patch::nullable")]
//!     category_id: Option<Option<i32>>,
//! }
//! ```

use sea_orm::ActiveValue::{self, NotSet, Set};
use serde::{Deserialize, Deserializer};

/// Deserializes a present key, including an explicit `null`, as `Some`.
///
/// Must be paired with `#[serde(default)]` so an absent key stays `None`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `Set` when the field was supplied, `NotSet` otherwise.
pub fn set_if_present<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}
