//! Configuration value representation.

use std::collections::HashMap;
use std::fmt;

/// A nested mapping of setting and section names to values.
pub type Group = HashMap<String, Value>;

/// A configuration value.
///
/// These are the only four kinds of data the plain-text format can carry.
/// `Absent` is a setting declared with no value, which is distinct from a
/// setting whose value is the empty string.
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    /// A setting declared without a value (`name =`).
    Absent,
    /// A scalar string value.
    String(String),
    /// An ordered list of string values.
    List(Vec<String>),
    /// A nested section.
    Group(Group),
}

impl Value {
    /// Returns `true` if this value is `Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns a reference to the string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the items if this is a `List`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a reference to the mapping if this is a `Group`.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Value::Group(group) => Some(group),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "absent"),
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Group(group) => f.debug_map().entries(group).finish(),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Group> for Value {
    fn from(group: Group) -> Self {
        Value::Group(group)
    }
}
