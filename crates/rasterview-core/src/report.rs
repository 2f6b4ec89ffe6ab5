//! Key/value metadata attached to the displayed image.
//!
//! The viewer fills a report with basic image properties and merges in
//! whatever a codec or caller supplies. It never interprets the values;
//! property panels read them back as-is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single report value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(v) => write!(f, "{}", v),
            Self::Number(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Sorted collection of named values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    values: BTreeMap<String, ReportValue>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(key.into(), ReportValue::Text(value.into()));
    }

    pub fn set_number(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), ReportValue::Number(value));
    }

    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), ReportValue::Flag(value));
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: ReportValue) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ReportValue> {
        self.values.get(key)
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove_value(&mut self, key: &str) -> Option<ReportValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every value of `other` into this report; `other` wins on collisions.
    pub fn merge_with(&mut self, other: &Report) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Returns a new report holding `self` overlaid with `other`.
    pub fn merged(&self, other: &Report) -> Report {
        let mut result = self.clone();
        result.merge_with(other);
        result
    }
}
