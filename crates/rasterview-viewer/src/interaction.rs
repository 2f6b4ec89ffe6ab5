//! Optional log of user interactions with the panel.
//!
//! Events pass an optional [`InteractionFilter`] before they are stored. A
//! capacity bounds the log; the oldest entries go first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

/// Decides which interactions are worth keeping.
pub trait InteractionFilter: Send + Sync {
    fn accept(&self, event: &InteractionEvent) -> bool;
}

impl<F> InteractionFilter for F
where
    F: Fn(&InteractionEvent) -> bool + Send + Sync,
{
    fn accept(&self, event: &InteractionEvent) -> bool {
        self(event)
    }
}

/// Keeps only the listed event kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindFilter {
    kinds: Vec<String>,
}

impl KindFilter {
    pub fn new<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }
}

impl InteractionFilter for KindFilter {
    fn accept(&self, event: &InteractionEvent) -> bool {
        self.kinds.iter().any(|kind| *kind == event.kind)
    }
}

/// List of interactions, recorded while enabled.
#[derive(Clone, Default)]
pub struct InteractionLog {
    enabled: bool,
    /// Zero means unbounded.
    capacity: usize,
    filter: Option<Arc<dyn InteractionFilter>>,
    entries: Vec<InteractionEvent>,
}

impl fmt::Debug for InteractionLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionLog")
            .field("enabled", &self.enabled)
            .field("capacity", &self.capacity)
            .field("filtered", &self.filter.is_some())
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl InteractionLog {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Bounds the log to `capacity` entries, 0 for no bound. Existing
    /// entries beyond the new bound are dropped oldest first.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.set_capacity(capacity);
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.trim();
    }

    /// Only events the filter accepts are stored. `None` keeps everything.
    pub fn set_filter(&mut self, filter: Option<Arc<dyn InteractionFilter>>) {
        self.filter = filter;
    }

    /// Appends an event stamped with the current time. Ignored while
    /// disabled or when the filter rejects it.
    pub fn record(&mut self, kind: impl Into<String>, data: Map<String, Value>) {
        if !self.enabled {
            return;
        }
        let event = InteractionEvent {
            timestamp: Utc::now(),
            kind: kind.into(),
            data,
        };
        if let Some(filter) = &self.filter {
            if !filter.accept(&event) {
                return;
            }
        }
        self.entries.push(event);
        self.trim();
    }

    fn trim(&mut self) {
        if self.capacity > 0 && self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(..excess);
        }
    }

    pub fn entries(&self) -> &[InteractionEvent] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}
