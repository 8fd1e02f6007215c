//! The [`Node`] capability and its declared [`NodeSignature`].

use serde::{Deserialize, Serialize};

use crate::args::NodeArgs;
use crate::error::NodeError;
use crate::value::PinType;

/// A named, typed pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinDef {
    pub name: String,
    #[serde(rename = "type")]
    pub pin_type: PinType,
}

/// Ordered input and output pins of a node kind.
///
/// Pins are addressed by position; names are for tooling and logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSignature {
    pub inputs: Vec<PinDef>,
    pub outputs: Vec<PinDef>,
}

impl NodeSignature {
    /// A signature with no pins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input pin.
    #[must_use]
    pub fn input(mut self, name: &str, pin_type: PinType) -> Self {
        self.inputs.push(PinDef {
            name: name.to_string(),
            pin_type,
        });
        self
    }

    /// Append an output pin.
    #[must_use]
    pub fn output(mut self, name: &str, pin_type: PinType) -> Self {
        self.outputs.push(PinDef {
            name: name.to_string(),
            pin_type,
        });
        self
    }
}

/// A node kind the graph engine can instantiate and invoke.
///
/// Instances are created per graph through the constructor passed to
/// [`Module::register_node`](crate::Module::register_node). Any state a node
/// needs (configuration, service handles) is handed to that constructor;
/// nodes never reach for globals.
pub trait Node: Send + Sync {
    /// Pins of this node kind. Read once at registration.
    fn signature() -> NodeSignature
    where
        Self: Sized;

    /// Run the node against resolved inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`NodeError`] if the node cannot complete; the engine
    /// decides whether that aborts the owning graph.
    fn execute(&self, args: &mut NodeArgs) -> Result<(), NodeError>;
}
