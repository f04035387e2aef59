//! Entity: identity + continuity across state changes.
//!
//! Concrete entities embed an [`EntityBase`] (identity plus pending domain
//! events) and derive their equality from it with [`impl_entity!`]:
//!
//! ```ignore
//! uuid_entity_id! { pub struct OrderId; }
//!
//! pub struct Order {
//!     base: EntityBase<OrderId, OrderEvent>,
//!     name: String,
//! }
//!
//! impl_entity!(Order => base: EntityBase<OrderId, OrderEvent>);
//! ```
//!
//! Two entities are equal iff they are of the same concrete type and their
//! identifiers are equal. Other attributes never take part in the comparison.

use core::any::Any;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::error::{DomainError, DomainResult};
use crate::event::{DomainEvent, HasDomainEvents, PendingEvents};
use crate::id::EntityId;
use crate::rule::{self, BusinessRule, CheckRule};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: EntityId;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, ignoring every other attribute.
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }

    /// Identity comparison against an arbitrary value.
    ///
    /// Returns `false` when `other` is not an entity of exactly this type.
    fn same_identity_as_any(&self, other: &dyn Any) -> bool
    where
        Self: Sized + 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.same_identity_as(other))
    }
}

/// Identity and pending domain events shared by every entity.
#[derive(Debug, Clone)]
pub struct EntityBase<I, E> {
    id: I,
    events: PendingEvents<E>,
}

impl<I: EntityId, E: DomainEvent> EntityBase<I, E> {
    /// New entity state with the given identity and no pending events.
    pub fn new(id: I) -> Self {
        Self {
            id,
            events: PendingEvents::new(),
        }
    }

    /// Two-phase construction for reconstitution from storage, where the
    /// identity is only known once the stored record has been read.
    pub fn builder() -> EntityBaseBuilder<I, E> {
        EntityBaseBuilder::default()
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    /// Append a domain event raised by the owning entity.
    pub fn record_event(&mut self, event: E) {
        self.events.record(event);
    }

    /// Events recorded since the last clear, in recording order.
    pub fn pending_events(&self) -> &[E] {
        self.events.as_slice()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Read and clear the pending events in one step.
    pub fn take_events(&mut self) -> Vec<E> {
        self.events.drain()
    }

    pub fn check_rule(&self, rule: &dyn BusinessRule) -> DomainResult<()> {
        rule::check_rule(rule)
    }
}

impl<I: PartialEq, E> PartialEq for EntityBase<I, E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<I: Eq, E> Eq for EntityBase<I, E> {}

impl<I: Hash, E> Hash for EntityBase<I, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<I: EntityId, E: DomainEvent> Entity for EntityBase<I, E> {
    type Id = I;

    fn id(&self) -> &I {
        &self.id
    }
}

impl<I: EntityId, E: DomainEvent> HasDomainEvents for EntityBase<I, E> {
    type Event = E;

    fn domain_events(&self) -> &[E] {
        self.pending_events()
    }

    fn clear_domain_events(&mut self) {
        self.clear_events();
    }

    fn take_domain_events(&mut self) -> Vec<E> {
        self.take_events()
    }
}

impl<I: EntityId, E: DomainEvent> CheckRule for EntityBase<I, E> {}

/// Builder for [`EntityBase`] when the identity is assigned after creation.
#[derive(Debug)]
pub struct EntityBaseBuilder<I, E> {
    id: Option<I>,
    _events: PhantomData<E>,
}

impl<I, E> Default for EntityBaseBuilder<I, E> {
    fn default() -> Self {
        Self {
            id: None,
            _events: PhantomData,
        }
    }
}

impl<I: EntityId, E: DomainEvent> EntityBaseBuilder<I, E> {
    pub fn id(mut self, id: I) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> DomainResult<EntityBase<I, E>> {
        let id = self.id.ok_or_else(|| {
            DomainError::invalid_id(
                "entity.identity_missing",
                "identity must be assigned before the entity is used",
            )
        })?;
        Ok(EntityBase::new(id))
    }
}

/// Implement [`Entity`], [`HasDomainEvents`], [`CheckRule`] and
/// identity-based `PartialEq`/`Eq`/`Hash` for a type embedding an
/// [`EntityBase`].
#[macro_export]
macro_rules! impl_entity {
    ($ty:ty => $field:ident : $base:ty) => {
        impl $crate::Entity for $ty {
            type Id = <$base as $crate::Entity>::Id;

            fn id(&self) -> &Self::Id {
                self.$field.id()
            }
        }

        impl $crate::HasDomainEvents for $ty {
            type Event = <$base as $crate::HasDomainEvents>::Event;

            fn domain_events(&self) -> &[Self::Event] {
                self.$field.pending_events()
            }

            fn clear_domain_events(&mut self) {
                self.$field.clear_events();
            }

            fn take_domain_events(&mut self) -> Vec<Self::Event> {
                self.$field.take_events()
            }
        }

        impl $crate::CheckRule for $ty {}

        impl ::core::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.$field == other.$field
            }
        }

        impl ::core::cmp::Eq for $ty {}

        impl ::core::hash::Hash for $ty {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.$field, state);
            }
        }
    };
}
