//! Strongly-typed entity identifiers.
//!
//! An identifier is a value object wrapping a natural or surrogate key.
//! Equality and hashing are structural: two identifiers of the same type are
//! equal iff their wrapped values are equal. Distinct identifier types never
//! compare with each other.

use core::fmt::Debug;
use core::hash::Hash;

use crate::value_object::ValueObject;

/// Identifier of an entity.
///
/// Implementations are immutable newtypes; use [`entity_id!`](crate::entity_id)
/// or [`uuid_entity_id!`](crate::uuid_entity_id) rather than implementing
/// this by hand.
pub trait EntityId: ValueObject + Eq + Hash {
    /// Underlying key representation (UUID, string, number, ...).
    type Value: Clone + Eq + Hash + Debug;

    /// Wrap a key. No validation happens at this layer.
    fn new(value: Self::Value) -> Self;

    /// Returns the wrapped key.
    fn value(&self) -> &Self::Value;

    fn into_value(self) -> Self::Value;
}

/// Declare a newtype identifier over an arbitrary key type.
///
/// ```ignore
/// entity_id! {
///     /// Customer reference as issued by the CRM.
///     pub struct CustomerRef(String);
/// }
/// ```
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($value:ty);) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $name($value);

        impl $name {
            pub fn new(value: $value) -> Self {
                Self(value)
            }

            pub fn value(&self) -> &$value {
                &self.0
            }
        }

        impl $crate::ValueObject for $name {}

        impl $crate::EntityId for $name {
            type Value = $value;

            fn new(value: $value) -> Self {
                Self(value)
            }

            fn value(&self) -> &$value {
                &self.0
            }

            fn into_value(self) -> $value {
                self.0
            }
        }

        // Transparent: serializes exactly as the wrapped key.
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$value as $crate::__private::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(Self)
            }
        }

        impl From<$value> for $name {
            fn from(value: $value) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $value {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Declare a UUID-backed identifier.
///
/// On top of [`entity_id!`](crate::entity_id) this provides `generate()`
/// (UUIDv7, time-ordered), `Display` and `FromStr`. Parse failures surface as
/// [`ErrorKind::InvalidId`](crate::ErrorKind::InvalidId).
#[macro_export]
macro_rules! uuid_entity_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $crate::entity_id! {
            $(#[$meta])*
            $vis struct $name($crate::__private::uuid::Uuid);
        }

        impl $name {
            /// Create a fresh identifier.
            ///
            /// Prefer passing IDs explicitly in tests for determinism.
            pub fn generate() -> Self {
                Self($crate::__private::uuid::Uuid::now_v7())
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = <$crate::__private::uuid::Uuid as core::str::FromStr>::from_str(s)
                    .map_err(|e| {
                        $crate::DomainError::invalid_id(
                            concat!(stringify!($name), ".malformed"),
                            format!("{}: {}", stringify!($name), e),
                        )
                    })?;
                Ok(Self(uuid))
            }
        }
    };
}
