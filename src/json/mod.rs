//! JSON serialization and deserialization, via the ``serde`` crate.

use serde::{Deserialize, Serialize};
use serde_json;

/// Round-trips an object to and from a JSON string.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return the JSON string representation of the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Reconstruct an object from its JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
