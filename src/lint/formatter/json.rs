//! JSON formatter for lint results.

use serde::Serialize;

/// Format any serializable lint output as pretty JSON.
pub fn format<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
