//! Per-type component storage.
//!
//! A [`ComponentStore`] holds the data of one component type for every
//! entity it is attached to. It is what the entity-serialisation pipeline
//! talks to: raw buffers go in through [`ComponentStore::add_from_raw_data`]
//! and come back out through [`ComponentStore::export_raw_data`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::codec;
use crate::component::{Component, ComponentRecord};
use crate::entity::EntityRef;
use crate::error::ComponentError;

/// Storage for one component type, keyed by entity.
#[derive(Debug)]
pub struct ComponentStore<T: Component> {
    data: HashMap<EntityRef, T>,
}

impl<T: Component> ComponentStore<T> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Attach default component data to `entity`.
    ///
    /// Runs [`Component::init_entity`] on first attachment. If the entity
    /// already has data, that data is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::InvalidEntity`] for [`EntityRef::INVALID`].
    pub fn add_entity(&mut self, entity: EntityRef) -> Result<&mut T, ComponentError> {
        Self::check_entity(entity)?;
        Ok(self.data.entry(entity).or_insert_with(|| {
            let mut value = T::default();
            value.init_entity(entity);
            value
        }))
    }

    /// Decode `raw` as `T::Def` and attach the result to `entity`.
    ///
    /// On first attachment the data is built with [`Component::from_def`]
    /// and [`Component::init_entity`] runs. If `entity` already has data,
    /// [`Component::apply_def`] overwrites its schema fields in place and
    /// `init_entity` does not run again. A failed import leaves the store
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Decode`] if `raw` does not match the schema,
    /// any error from [`Component::from_def`] or [`Component::apply_def`],
    /// or [`ComponentError::InvalidEntity`] for the invalid reference.
    pub fn add_from_raw_data(
        &mut self,
        entity: EntityRef,
        raw: &[u8],
    ) -> Result<&mut T, ComponentError> {
        Self::check_entity(entity)?;
        let def: T::Def = codec::decode(raw)?;

        let (replaced, value) = match self.data.entry(entity) {
            Entry::Occupied(slot) => {
                let value = slot.into_mut();
                value.apply_def(def)?;
                (true, value)
            }
            Entry::Vacant(slot) => {
                let mut value = T::from_def(def)?;
                value.init_entity(entity);
                (false, slot.insert(value))
            }
        };
        debug!(
            component = T::type_name(),
            %entity,
            replaced,
            bytes = raw.len(),
            "component data imported"
        );
        Ok(value)
    }

    /// Encode the data attached to `entity` as MessagePack `T::Def`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::NotAttached`] if `entity` has no data, or
    /// [`ComponentError::Encode`] if serialisation fails.
    pub fn export_raw_data(&self, entity: EntityRef) -> Result<Vec<u8>, ComponentError> {
        let value = self.get(entity).ok_or(ComponentError::NotAttached {
            component: T::type_name(),
            entity,
        })?;
        codec::encode(&value.to_def())
    }

    /// Import a batch of records. Stops at the first failing record.
    ///
    /// # Errors
    ///
    /// Returns the error of the first record that fails to import. Records
    /// before it stay imported.
    pub fn import_records(&mut self, records: &[ComponentRecord]) -> Result<usize, ComponentError> {
        for record in records {
            self.add_from_raw_data(record.entity, &record.data)?;
        }
        Ok(records.len())
    }

    /// Export every attached entity as a [`ComponentRecord`], ordered by
    /// entity.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Encode`] if any entity fails to serialise.
    pub fn export_records(&self) -> Result<Vec<ComponentRecord>, ComponentError> {
        let mut entities: Vec<EntityRef> = self.data.keys().copied().collect();
        entities.sort();
        entities
            .into_iter()
            .map(|entity| {
                Ok(ComponentRecord {
                    entity,
                    data: self.export_raw_data(entity)?,
                })
            })
            .collect()
    }

    /// Detach and return the data for `entity`.
    pub fn remove_entity(&mut self, entity: EntityRef) -> Option<T> {
        self.data.remove(&entity)
    }

    /// The data attached to `entity`, if any.
    #[must_use]
    pub fn get(&self, entity: EntityRef) -> Option<&T> {
        self.data.get(&entity)
    }

    /// Mutable access to the data attached to `entity`.
    #[must_use]
    pub fn get_mut(&mut self, entity: EntityRef) -> Option<&mut T> {
        self.data.get_mut(&entity)
    }

    /// Whether `entity` has data in this store.
    #[must_use]
    pub fn contains(&self, entity: EntityRef) -> bool {
        self.data.contains_key(&entity)
    }

    /// Number of entities with data in this store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no entity has data in this store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over `(entity, data)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityRef, &T)> {
        self.data.iter().map(|(&e, v)| (e, v))
    }

    fn check_entity(entity: EntityRef) -> Result<(), ComponentError> {
        if entity.is_valid() {
            Ok(())
        } else {
            Err(ComponentError::InvalidEntity {
                component: T::type_name(),
            })
        }
    }
}

impl<T: Component> Default for ComponentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
