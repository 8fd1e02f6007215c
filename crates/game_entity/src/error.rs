//! Component-layer error types.

use crate::entity::EntityRef;

/// Errors raised while attaching, importing or exporting component data.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// Serialising component data to MessagePack failed.
    #[error("failed to encode component data: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// The raw buffer does not match the component's serialised schema.
    #[error("failed to decode component data: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    /// An indexed field referenced a slot outside the component's range.
    #[error("{component}: index {index} is out of range (len {len})")]
    IndexOutOfRange {
        /// Component type name.
        component: &'static str,
        /// The offending index.
        index: usize,
        /// Number of valid slots.
        len: usize,
    },

    /// The entity has no data for this component type.
    #[error("{component} is not attached to {entity}")]
    NotAttached {
        /// Component type name.
        component: &'static str,
        /// The entity that was looked up.
        entity: EntityRef,
    },

    /// Components cannot be attached to [`EntityRef::INVALID`].
    #[error("cannot attach {component} to the invalid entity")]
    InvalidEntity {
        /// Component type name.
        component: &'static str,
    },
}
