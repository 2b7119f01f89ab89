//! Append-only event logs and the "latest event" lookup.
//!
//! Persistence does not guarantee strictly increasing timestamps across rapid
//! consecutive writes, so the supplied order is part of the contract: the
//! latest event is the one with the greatest `created_at`, and among equal
//! timestamps the one supplied last wins.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An event carrying its creation time.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
}

/// Ordered, append-only sequence of events for one deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct EventLog<T> {
    events: Vec<T>,
}

impl<T> Default for EventLog<T> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<T> EventLog<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event. Earlier events are never touched.
    pub fn push(&mut self, event: T) {
        self.events.push(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in supplied order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.events.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.events
    }
}

impl<T: Timestamped> EventLog<T> {
    /// The most recent event: greatest timestamp, last in supplied order on ties.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        latest(&self.events)
    }

    /// Events sorted by timestamp, keeping supplied order among equal timestamps.
    #[must_use]
    pub fn chronological(&self) -> Vec<&T> {
        let mut sorted: Vec<&T> = self.events.iter().collect();
        sorted.sort_by_key(|event| event.created_at());
        sorted
    }
}

impl<T> From<Vec<T>> for EventLog<T> {
    fn from(events: Vec<T>) -> Self {
        Self { events }
    }
}

impl<T> FromIterator<T> for EventLog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a EventLog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Select the latest event of an ordered slice.
///
/// Timestamp is the primary key; position in the slice breaks ties in favour
/// of the later element.
#[must_use]
pub fn latest<T: Timestamped>(events: &[T]) -> Option<&T> {
    events.iter().reduce(|best, candidate| {
        if candidate.created_at() >= best.created_at() {
            candidate
        } else {
            best
        }
    })
}
