//! Per-entity numeric attributes.
//!
//! [`AttributesData`] is a fixed-size vector of `f32` values indexed by
//! [`AttributeDef`]. Typed access through the enum can never leave the
//! vector; untyped access by raw index is checked and reports
//! [`ComponentError::IndexOutOfRange`].
//!
//! The serialised form, [`AttributesDef`], is a sparse list of
//! `(attribute, value)` pairs. Attributes missing from the list keep their
//! default value.

use game_entity::{Component, ComponentError, ComponentStore};
use serde::{Deserialize, Serialize};

/// Score a player must reach at the start of a game.
pub const DEFAULT_TARGET_SCORE: f32 = 20.0;

/// The attributes an entity can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum AttributeDef {
    PatronsFed = 0,
    TargetScore = 1,
    Health = 2,
    SushiThrown = 3,
    LapsCompleted = 4,
}

impl AttributeDef {
    /// Number of attributes.
    pub const SIZE: usize = 5;

    /// Every attribute, in index order.
    pub const ALL: [AttributeDef; Self::SIZE] = [
        AttributeDef::PatronsFed,
        AttributeDef::TargetScore,
        AttributeDef::Health,
        AttributeDef::SushiThrown,
        AttributeDef::LapsCompleted,
    ];

    /// Position of this attribute in the attribute vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The attribute stored at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The attribute's name, as used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AttributeDef::PatronsFed => "PatronsFed",
            AttributeDef::TargetScore => "TargetScore",
            AttributeDef::Health => "Health",
            AttributeDef::SushiThrown => "SushiThrown",
            AttributeDef::LapsCompleted => "LapsCompleted",
        }
    }
}

impl std::fmt::Display for AttributeDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute values for one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributesData {
    values: [f32; AttributeDef::SIZE],
}

impl AttributesData {
    /// Current value of `attribute`.
    #[must_use]
    pub fn get(&self, attribute: AttributeDef) -> f32 {
        self.values[attribute.index()]
    }

    /// Overwrite the value of `attribute`.
    pub fn set(&mut self, attribute: AttributeDef, value: f32) {
        self.values[attribute.index()] = value;
    }

    /// Add `delta` to `attribute` and return the new value.
    pub fn add(&mut self, attribute: AttributeDef, delta: f32) -> f32 {
        let slot = &mut self.values[attribute.index()];
        *slot += delta;
        *slot
    }

    /// Read the value at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::IndexOutOfRange`] if `index` is not below
    /// [`AttributeDef::SIZE`].
    pub fn get_index(&self, index: usize) -> Result<f32, ComponentError> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| out_of_range(index))
    }

    /// Write the value at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::IndexOutOfRange`] if `index` is not below
    /// [`AttributeDef::SIZE`]. Nothing is written in that case.
    pub fn set_index(&mut self, index: usize, value: f32) -> Result<(), ComponentError> {
        let slot = self.values.get_mut(index).ok_or_else(|| out_of_range(index))?;
        *slot = value;
        Ok(())
    }

    /// All values in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// `(attribute, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeDef, f32)> + '_ {
        AttributeDef::ALL.iter().map(|&a| (a, self.get(a)))
    }
}

impl Default for AttributesData {
    fn default() -> Self {
        let mut values = [0.0; AttributeDef::SIZE];
        values[AttributeDef::TargetScore.index()] = DEFAULT_TARGET_SCORE;
        Self { values }
    }
}

fn out_of_range(index: usize) -> ComponentError {
    ComponentError::IndexOutOfRange {
        component: AttributesData::type_name(),
        index,
        len: AttributeDef::SIZE,
    }
}

/// Serialised schema for [`AttributesData`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributesDef {
    #[serde(default)]
    pub attributes: Vec<AttributeValueDef>,
}

/// One `(attribute, value)` pair. `attribute` is the raw attribute index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeValueDef {
    pub attribute: u16,
    pub value: f32,
}

impl Component for AttributesData {
    type Def = AttributesDef;

    fn type_name() -> &'static str {
        "Attributes"
    }

    /// Starts from the defaults. See [`AttributesData::apply_def`].
    fn from_def(def: AttributesDef) -> Result<Self, ComponentError> {
        let mut data = Self::default();
        data.apply_def(def)?;
        Ok(data)
    }

    /// Writes every listed attribute; unlisted ones keep their current
    /// value. Later entries for the same attribute overwrite earlier ones.
    fn apply_def(&mut self, def: AttributesDef) -> Result<(), ComponentError> {
        let mut values = self.values;
        for entry in def.attributes {
            let index = usize::from(entry.attribute);
            *values.get_mut(index).ok_or_else(|| out_of_range(index))? = entry.value;
        }
        self.values = values;
        Ok(())
    }

    fn to_def(&self) -> AttributesDef {
        AttributesDef {
            attributes: self
                .iter()
                .map(|(attribute, value)| AttributeValueDef {
                    attribute: attribute as u16,
                    value,
                })
                .collect(),
        }
    }
}

/// Storage for every entity's attributes.
pub type AttributesComponent = ComponentStore<AttributesData>;
