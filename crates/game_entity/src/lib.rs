//! # game_entity
//!
//! The entity side of the game runtime: what an entity reference is, what a
//! component must provide, and how component data for many entities is held
//! and moved in and out of its serialised form.
//!
//! This crate provides:
//!
//! - [`EntityRef`]: lightweight `u64` entity references.
//! - [`EntityAllocator`]: allocator that recycles released references.
//! - [`Component`] trait: the contract for per-entity data, including its
//!   serialised schema type.
//! - [`ComponentStore`]: per-type storage with raw-data import/export hooks.
//! - [`codec`]: MessagePack helpers used for raw component data.

pub mod codec;
pub mod component;
pub mod entity;
pub mod error;
pub mod store;

pub use component::{Component, ComponentRecord, ComponentTypeId};
pub use entity::{EntityAllocator, EntityRef};
pub use error::ComponentError;
pub use store::ComponentStore;
