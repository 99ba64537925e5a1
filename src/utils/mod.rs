//! Utility functions.
//!
//! Clock and string helpers shared by the models and the inspector.

pub mod compare;

pub use compare::java_compare;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Split a comma-separated list into trimmed, lowercased, non-empty names.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
