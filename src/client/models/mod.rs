//! UASD portal data models
//!
//! Field names follow the portal API (Spanish, camelCase); Rust names are
//! snake_case with `serde` renames.

mod auth;
mod debt;
mod event;
mod news;
mod request;
mod schedule;
mod subject;
mod task;
mod user;
mod video;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use auth::{LoginData, LoginRequest, PasswordResetRequest};
pub use debt::{Debt, PAYMENT_URL};
pub use event::Event;
pub use news::NewsItem;
pub use request::{NewRequest, REQUEST_TYPES, RequestType, StudentRequest};
pub use schedule::{Location, Schedule};
pub use subject::Subject;
pub use task::Task;
pub use user::UserInfo;
pub use video::Video;

/// Record identifier; the portal sends numbers for most resources but
/// strings are accepted too
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl Id {
    /// Whether this id matches user input such as `42`
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        match self {
            Id::Number(n) => input.parse::<i64>().is_ok_and(|parsed| parsed == *n),
            Id::Text(s) => s == input,
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

/// Find a record by its displayed id
pub fn find_by_id<'a, T>(items: &'a [T], input: &str, id: impl Fn(&T) -> &Id) -> Option<&'a T> {
    items.iter().find(|item| id(item).matches(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_deserializes_number_and_text() {
        let ids: Vec<Id> = serde_json::from_str(r#"[3, "A-7"]"#).unwrap();
        assert_eq!(ids, vec![Id::Number(3), Id::Text("A-7".to_string())]);
    }

    #[test]
    fn test_id_matches_input() {
        assert!(Id::Number(42).matches("42"));
        assert!(Id::Number(42).matches(" 42 "));
        assert!(!Id::Number(42).matches("4"));
        assert!(!Id::Number(42).matches("abc"));
        assert!(Id::Text("beca-1".to_string()).matches("beca-1"));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(Id::Number(5).to_string(), "5");
        assert_eq!(Id::Text("x".to_string()).to_string(), "x");
    }
}
