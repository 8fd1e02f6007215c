//! Per-invocation node arguments.

use crate::error::GraphError;
use crate::node::NodeSignature;
use crate::value::{NodeValue, PinType};

/// Resolved inputs for one node invocation, plus the outputs it writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeArgs {
    inputs: Vec<NodeValue>,
    outputs: Vec<Option<NodeValue>>,
}

impl NodeArgs {
    /// Arguments with the given inputs in pin order and no outputs.
    #[must_use]
    pub fn new(inputs: Vec<NodeValue>) -> Self {
        Self {
            inputs,
            outputs: Vec::new(),
        }
    }

    /// Check the inputs against `signature` and size the output slots.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ArityMismatch`] if the input count differs from
    /// the signature, or [`GraphError::TypeMismatch`] for the first input
    /// whose type the pin does not accept.
    pub fn validate(&mut self, signature: &NodeSignature) -> Result<(), GraphError> {
        if self.inputs.len() != signature.inputs.len() {
            return Err(GraphError::ArityMismatch {
                expected: signature.inputs.len(),
                actual: self.inputs.len(),
            });
        }
        for (index, (value, pin)) in self.inputs.iter().zip(&signature.inputs).enumerate() {
            if !pin.pin_type.accepts(value.pin_type()) {
                return Err(GraphError::TypeMismatch {
                    index,
                    expected: pin.pin_type,
                    actual: value.pin_type(),
                });
            }
        }
        self.outputs = vec![None; signature.outputs.len()];
        Ok(())
    }

    /// The raw value on input `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingInput`] if there is no such input.
    pub fn input(&self, index: usize) -> Result<&NodeValue, GraphError> {
        self.inputs
            .get(index)
            .ok_or(GraphError::MissingInput { index })
    }

    /// # Errors
    ///
    /// [`GraphError::MissingInput`] or [`GraphError::TypeMismatch`].
    pub fn input_bool(&self, index: usize) -> Result<bool, GraphError> {
        match self.input(index)? {
            NodeValue::Bool(v) => Ok(*v),
            other => Err(mismatch(index, PinType::Bool, other)),
        }
    }

    /// # Errors
    ///
    /// [`GraphError::MissingInput`] or [`GraphError::TypeMismatch`].
    pub fn input_int(&self, index: usize) -> Result<i32, GraphError> {
        match self.input(index)? {
            NodeValue::Int(v) => Ok(*v),
            other => Err(mismatch(index, PinType::Int, other)),
        }
    }

    /// Integers are widened.
    ///
    /// # Errors
    ///
    /// [`GraphError::MissingInput`] or [`GraphError::TypeMismatch`].
    pub fn input_float(&self, index: usize) -> Result<f32, GraphError> {
        match self.input(index)? {
            NodeValue::Float(v) => Ok(*v),
            NodeValue::Int(v) => Ok(*v as f32),
            other => Err(mismatch(index, PinType::Float, other)),
        }
    }

    /// # Errors
    ///
    /// [`GraphError::MissingInput`] or [`GraphError::TypeMismatch`].
    pub fn input_string(&self, index: usize) -> Result<&str, GraphError> {
        match self.input(index)? {
            NodeValue::String(v) => Ok(v),
            other => Err(mismatch(index, PinType::String, other)),
        }
    }

    /// Write output `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UndeclaredOutput`] if the signature validated
    /// against has no such output.
    pub fn set_output(&mut self, index: usize, value: NodeValue) -> Result<(), GraphError> {
        let slot = self
            .outputs
            .get_mut(index)
            .ok_or(GraphError::UndeclaredOutput { index })?;
        *slot = Some(value);
        Ok(())
    }

    /// Output `index`, if the node wrote it.
    #[must_use]
    pub fn output(&self, index: usize) -> Option<&NodeValue> {
        self.outputs.get(index).and_then(Option::as_ref)
    }

    /// All inputs in pin order.
    #[must_use]
    pub fn inputs(&self) -> &[NodeValue] {
        &self.inputs
    }
}

fn mismatch(index: usize, expected: PinType, actual: &NodeValue) -> GraphError {
    GraphError::TypeMismatch {
        index,
        expected,
        actual: actual.pin_type(),
    }
}
