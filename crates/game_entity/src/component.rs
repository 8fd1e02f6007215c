//! Core [`Component`] trait and associated identity types.
//!
//! A component is the data one entity carries for one concern (attributes,
//! transform, ...). Each component type names a serialised schema type,
//! [`Component::Def`], which is the shape raw data takes on disk and on the
//! wire. Converting from the schema is fallible so malformed input is
//! reported instead of being stored.
//!
//! [`ComponentTypeId`] is the FNV-1a 64-bit hash of the component's name, so
//! any tool can compute the same id from the same string.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::entity::EntityRef;
use crate::error::ComponentError;

/// A stable identifier for a component type, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Hash `name` with FNV-1a 64.
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325
    /// for each byte in name.as_bytes():
    ///     hash = (hash XOR byte) * 0x00000100000001b3
    /// ```
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// The id of component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }
}

/// The contract for per-entity component data.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use game_entity::{Component, ComponentError};
///
/// #[derive(Debug, Default)]
/// struct Lives(u8);
///
/// #[derive(Serialize, Deserialize)]
/// struct LivesDef {
///     lives: u8,
/// }
///
/// impl Component for Lives {
///     type Def = LivesDef;
///
///     fn type_name() -> &'static str {
///         "Lives"
///     }
///
///     fn from_def(def: LivesDef) -> Result<Self, ComponentError> {
///         Ok(Lives(def.lives))
///     }
///
///     fn to_def(&self) -> LivesDef {
///         LivesDef { lives: self.0 }
///     }
/// }
/// ```
pub trait Component: Default + Send + Sync + 'static {
    /// The serialised schema this component is loaded from and saved to.
    type Def: Serialize + DeserializeOwned;

    /// A human-readable name for this component type.
    fn type_name() -> &'static str;

    /// The [`ComponentTypeId`] for this component type.
    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::from_name(Self::type_name())
    }

    /// Build component data from its schema form.
    ///
    /// # Errors
    ///
    /// Returns a [`ComponentError`] if `def` holds values the component
    /// cannot represent.
    fn from_def(def: Self::Def) -> Result<Self, ComponentError>;

    /// Overwrite the schema fields of already attached data with `def`.
    ///
    /// Implementations must validate `def` before writing, so an error
    /// leaves `self` unchanged. The default replaces the whole value;
    /// components that keep runtime state outside the schema (anything set
    /// by [`Component::init_entity`]) override this to keep it.
    ///
    /// # Errors
    ///
    /// Returns a [`ComponentError`] if `def` holds values the component
    /// cannot represent.
    fn apply_def(&mut self, def: Self::Def) -> Result<(), ComponentError> {
        *self = Self::from_def(def)?;
        Ok(())
    }

    /// Convert component data to its schema form.
    fn to_def(&self) -> Self::Def;

    /// Called once when the component is first attached to `entity`.
    fn init_entity(&mut self, _entity: EntityRef) {}
}

/// An entity paired with the raw bytes of one of its components.
///
/// This is the unit entity files and pipelines exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// The entity the data belongs to.
    pub entity: EntityRef,
    /// MessagePack-encoded [`Component::Def`].
    pub data: Vec<u8>,
}
