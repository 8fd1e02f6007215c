//! Graph-layer error types.

use crate::value::PinType;

/// Error returned by a node's own logic.
///
/// Nodes report their domain errors through this box; callers that know the
/// concrete node can downcast it.
pub type NodeError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while registering, resolving or executing nodes.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// No module is registered under this name.
    #[error("unknown module: {0}")]
    UnknownModule(String),

    /// The module exists but has no node of this name.
    #[error("unknown node {module}.{node}")]
    UnknownNode { module: String, node: String },

    /// The number of resolved inputs does not match the signature.
    #[error("expected {expected} inputs, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// No value was resolved for an input pin.
    #[error("input {index} is missing")]
    MissingInput { index: usize },

    /// A resolved input does not have the pin's declared type.
    #[error("input {index}: expected {expected}, got {actual}")]
    TypeMismatch {
        index: usize,
        expected: PinType,
        actual: PinType,
    },

    /// An output index outside the signature was written.
    #[error("output {index} is not declared")]
    UndeclaredOutput { index: usize },

    /// The node ran and reported a failure.
    #[error("node {module}.{node} failed: {source}")]
    NodeFailed {
        module: String,
        node: String,
        #[source]
        source: NodeError,
    },
}
