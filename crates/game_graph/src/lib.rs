//! # game_graph
//!
//! The host side of behavior graphs: what a node is, how it declares its
//! pins, how resolved input values reach it, and the registry the graph
//! engine instantiates nodes from.
//!
//! - [`Node`]: executable node capability.
//! - [`NodeSignature`]: ordered, typed input and output pins.
//! - [`NodeArgs`]: resolved inputs and collected outputs for one invocation.
//! - [`EventSystem`] / [`Module`]: named modules of named node kinds.

pub mod args;
pub mod error;
pub mod node;
pub mod registry;
pub mod value;

pub use args::NodeArgs;
pub use error::{GraphError, NodeError};
pub use node::{Node, NodeSignature, PinDef};
pub use registry::{EventSystem, Module, NodeRegistration};
pub use value::{NodeValue, PinType};
