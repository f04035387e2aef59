//! `buildingblocks-domain` — domain modeling building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identity-bearing entities, strongly-typed identifiers, pending domain events
//! and business-rule checks. Dispatching events and persisting entities are
//! left to the application layer.

pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod rule;
pub mod value_object;

pub use entity::{Entity, EntityBase, EntityBaseBuilder};
pub use error::{DomainError, DomainResult, ErrorKind};
pub use event::{DomainEvent, HasDomainEvents, PendingEvents};
pub use id::EntityId;
pub use rule::{BusinessRule, CheckRule, RuleViolations, check_rule, check_rules};
pub use value_object::ValueObject;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use uuid;
}
