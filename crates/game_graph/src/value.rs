//! Values that flow along graph edges and the pin types that carry them.

use serde::{Deserialize, Serialize};

/// Data type of a node pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinType {
    /// A pulse with no payload. Used for triggers.
    Void,
    Bool,
    /// 32-bit signed integer.
    Int,
    /// 32-bit float.
    Float,
    String,
}

impl PinType {
    /// Whether a value of type `actual` may be fed into a pin of this type.
    ///
    /// Types must match exactly, except that integers widen into float pins.
    #[must_use]
    pub fn accepts(self, actual: PinType) -> bool {
        self == actual || matches!((self, actual), (PinType::Float, PinType::Int))
    }
}

impl std::fmt::Display for PinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PinType::Void => "void",
            PinType::Bool => "bool",
            PinType::Int => "int",
            PinType::Float => "float",
            PinType::String => "string",
        };
        f.write_str(name)
    }
}

/// A resolved value on a pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum NodeValue {
    Void,
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
}

impl NodeValue {
    /// The pin type this value satisfies exactly.
    #[must_use]
    pub fn pin_type(&self) -> PinType {
        match self {
            NodeValue::Void => PinType::Void,
            NodeValue::Bool(_) => PinType::Bool,
            NodeValue::Int(_) => PinType::Int,
            NodeValue::Float(_) => PinType::Float,
            NodeValue::String(_) => PinType::String,
        }
    }
}

impl From<bool> for NodeValue {
    fn from(v: bool) -> Self {
        NodeValue::Bool(v)
    }
}

impl From<i32> for NodeValue {
    fn from(v: i32) -> Self {
        NodeValue::Int(v)
    }
}

impl From<f32> for NodeValue {
    fn from(v: f32) -> Self {
        NodeValue::Float(v)
    }
}

impl From<&str> for NodeValue {
    fn from(v: &str) -> Self {
        NodeValue::String(v.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(v: String) -> Self {
        NodeValue::String(v)
    }
}
