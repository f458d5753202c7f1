mod tests_enums;
mod tests_types;

use serde::de::DeserializeOwned;

/// Build a raw record the way the loader would, from model JSON.
#[allow(clippy::unwrap_used)]
fn raw<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
