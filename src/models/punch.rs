//! Punch events and employee identity.

use serde::{Deserialize, Serialize};

/// A single raw clock-in/clock-out event from the time clock.
///
/// The timestamp is kept as the stored string. Its date and time are read by
/// slicing the text so that a server timezone never shifts a punch into the
/// neighbouring day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchEvent {
    /// The time-clock user id the punch was recorded under.
    pub employee_key: String,
    /// Raw timestamp, e.g. `2025-01-15 07:58:12` or `2025-01-15T07:58:12.000Z`.
    pub timestamp: String,
}

impl PunchEvent {
    /// Creates a punch event.
    pub fn new(employee_key: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            employee_key: employee_key.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// The identifiers an employee may be referenced by.
///
/// Upstream records reference employees by either an internal object id or
/// the time-clock user id; a record belongs to the employee when either
/// matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeKeys {
    /// Internal employee object id.
    #[serde(default)]
    pub object_id: Option<String>,
    /// Time-clock user id.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl EmployeeKeys {
    /// Creates keys from both identifiers.
    pub fn new(object_id: Option<String>, user_id: Option<String>) -> Self {
        Self { object_id, user_id }
    }

    /// Whether `key` equals either identifier, ignoring surrounding
    /// whitespace on both sides.
    pub fn is_key(&self, key: &str) -> bool {
        let key = key.trim();
        let same = |id: &Option<String>| id.as_deref().map(str::trim) == Some(key);
        !key.is_empty() && (same(&self.object_id) || same(&self.user_id))
    }

    /// A human-readable identifier for log fields and reports.
    pub fn display_key(&self) -> &str {
        self.user_id
            .as_deref()
            .or(self.object_id.as_deref())
            .unwrap_or("<unknown>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_key_matches_either_identifier() {
        let keys = EmployeeKeys::new(Some("emp-9".to_string()), Some("42".to_string()));
        assert!(keys.is_key("emp-9"));
        assert!(keys.is_key("42"));
        assert!(keys.is_key(" 42 "));
        assert!(!keys.is_key("43"));
        assert!(!keys.is_key(""));
    }

    #[test]
    fn test_is_key_ignores_padding_on_stored_ids() {
        let keys = EmployeeKeys::new(Some("emp-9 ".to_string()), Some(" 42 ".to_string()));
        assert!(keys.is_key("42"));
        assert!(keys.is_key(" emp-9"));
        assert!(!keys.is_key("4"));
    }

    #[test]
    fn test_empty_keys_match_nothing() {
        let keys = EmployeeKeys::default();
        assert!(!keys.is_key("42"));
        assert_eq!(keys.display_key(), "<unknown>");
    }

    #[test]
    fn test_display_key_prefers_user_id() {
        let keys = EmployeeKeys::new(Some("emp-9".to_string()), Some("42".to_string()));
        assert_eq!(keys.display_key(), "42");
        let keys = EmployeeKeys::new(Some("emp-9".to_string()), None);
        assert_eq!(keys.display_key(), "emp-9");
    }
}
