//! Gameplay component definitions.
//!
//! Each type here implements [`Component`](game_entity::Component) and is
//! stored per entity in a [`ComponentStore`](game_entity::ComponentStore).

pub mod attributes;

pub use attributes::{
    AttributeDef, AttributeValueDef, AttributesComponent, AttributesData, AttributesDef,
    DEFAULT_TARGET_SCORE,
};
