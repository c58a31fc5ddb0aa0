//! Property list encoding
//!
//! Apple property lists in both encodings used by the macOS terminal
//! profiles:
//! - XML (`xml::to_string`)
//! - Binary `bplist00` (`binary::to_vec`)
//!
//! Only writing is supported.

pub mod binary;
pub mod xml;

use thiserror::Error;

/// Property list encoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlistError {
    /// The XML encoding has no representation for UIDs
    #[error("UID values cannot be encoded as XML plist")]
    UidInXml,

    /// Strings may not contain XML control characters
    #[error("string contains a control character: {0:?}")]
    ControlCharacter(String),
}

/// A property list value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text
    String(String),
    /// Signed integer
    Integer(i64),
    /// Double precision float
    Real(f64),
    /// Boolean
    Boolean(bool),
    /// Raw bytes
    Data(Vec<u8>),
    /// Ordered list
    Array(Vec<Value>),
    /// Keyed dictionary
    Dictionary(Dictionary),
    /// Keyed-archive object reference (binary only)
    Uid(u64),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Data(value)
    }
}

impl From<Dictionary> for Value {
    fn from(value: Dictionary) -> Self {
        Self::Dictionary(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

/// Insertion-ordered dictionary with string keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, Value)>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a key, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order, or sorted by key
    pub(crate) fn entries(&self, sort_keys: bool) -> Vec<&(String, Value)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        if sort_keys {
            entries.sort_by(|a, b| a.0.cmp(&b.0));
        }
        entries
    }
}
