//! Request and response shapes of the ResumeTwin backend.
//!
//! Every optional response field is decoded with `#[serde(default)]` so that a
//! partial response never fails to parse; the defaults are the values the UI
//! shows when the backend leaves a field out. An explicit `null` decodes to the
//! same default through `null_as_default`.

use serde::{Deserialize, Deserializer};

mod career_path;
mod file;
mod report;
mod skills;
mod upload;

pub use career_path::*;
pub use file::*;
pub use report::*;
pub use skills::*;
pub use upload::*;

/// Decode `null` as `T::default()`. Pair with `#[serde(default)]` so a missing
/// key behaves the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
