//! Domain events raised by entities and queued for external dispatch.
//!
//! Entities record events as a byproduct of business methods but never
//! publish them. Draining happens at a unit-of-work boundary owned by the
//! application layer (typically after a successful commit).

use chrono::{DateTime, Utc};

/// A record of something that happened during a business operation.
///
/// Events are **immutable** facts; treat them as values.
pub trait DomainEvent: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "sales.order.renamed").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Ordered, append-only log of events not yet dispatched.
///
/// Insertion order is preserved; there is no deduplication or coalescing.
/// Only the owner (through `&mut self`) can append; readers get a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEvents<E> {
    events: Vec<E>,
}

impl<E> Default for PendingEvents<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E: DomainEvent> PendingEvents<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Does not validate or dispatch it.
    pub fn record(&mut self, event: E) {
        tracing::trace!(event_type = event.event_type(), "domain event recorded");
        self.events.push(event);
    }

    /// Read-only view of the events in insertion order.
    pub fn as_slice(&self) -> &[E] {
        &self.events
    }

    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.events.iter()
    }

    /// Drop every pending event. Clearing an empty log is a no-op.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Read and clear in a single step.
    ///
    /// Since this takes `&mut self`, nothing can record an event between the
    /// read and the clear.
    pub fn drain(&mut self) -> Vec<E> {
        let drained = core::mem::take(&mut self.events);
        if !drained.is_empty() {
            tracing::trace!(count = drained.len(), "domain events drained");
        }
        drained
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a, E> IntoIterator for &'a PendingEvents<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Capability of exposing recorded domain events to a dispatcher.
///
/// A dispatcher reads [`domain_events`](Self::domain_events) and then calls
/// [`clear_domain_events`](Self::clear_domain_events), or uses
/// [`take_domain_events`](Self::take_domain_events) to do both at once.
pub trait HasDomainEvents {
    type Event: DomainEvent;

    fn domain_events(&self) -> &[Self::Event];

    fn clear_domain_events(&mut self);

    fn take_domain_events(&mut self) -> Vec<Self::Event> {
        let events = self.domain_events().to_vec();
        self.clear_domain_events();
        events
    }
}
