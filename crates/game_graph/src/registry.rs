//! Node registry: named modules of named, constructible node kinds.
//!
//! Modules are added once at startup by whatever subsystem owns them (the
//! achievements bridge adds `gpg`, for example) and then only read. The graph
//! engine resolves a node reference `module.node` here, creates a fresh
//! instance, and invokes it.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::args::NodeArgs;
use crate::error::GraphError;
use crate::node::{Node, NodeSignature};

type NodeCtor = Arc<dyn Fn() -> Box<dyn Node> + Send + Sync>;

/// A node kind: its name, its pins, and how to build an instance.
#[derive(Clone)]
pub struct NodeRegistration {
    name: String,
    signature: NodeSignature,
    ctor: NodeCtor,
}

impl NodeRegistration {
    /// Name of the node kind within its module.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared input and output pins.
    #[must_use]
    pub fn signature(&self) -> &NodeSignature {
        &self.signature
    }

    /// Build a fresh node instance.
    #[must_use]
    pub fn instantiate(&self) -> Box<dyn Node> {
        (self.ctor)()
    }
}

impl std::fmt::Debug for NodeRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRegistration")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A named group of node kinds.
#[derive(Debug)]
pub struct Module {
    name: String,
    nodes: BTreeMap<String, NodeRegistration>,
}

impl Module {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: BTreeMap::new(),
        }
    }

    /// Name graphs use to reference this module.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register node kind `T` under `name`, built by `ctor`.
    ///
    /// The signature is taken from [`Node::signature`]. Registering a name
    /// that already exists replaces the earlier registration, so a module's
    /// node kinds never contain duplicates.
    pub fn register_node<T, F>(&mut self, name: &str, ctor: F)
    where
        T: Node + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let registration = NodeRegistration {
            name: name.to_string(),
            signature: T::signature(),
            ctor: Arc::new(move || Box::new(ctor()) as Box<dyn Node>),
        };
        if self.nodes.insert(name.to_string(), registration).is_some() {
            warn!(module = self.name, node = name, "node re-registered, replacing");
        } else {
            debug!(module = self.name, node = name, "node registered");
        }
    }

    /// The registration called `name`, if any.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&NodeRegistration> {
        self.nodes.get(name)
    }

    /// Node names in sorted order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of registered node kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The shared registry of node modules.
#[derive(Debug, Default)]
pub struct EventSystem {
    modules: BTreeMap<String, Module>,
}

impl EventSystem {
    /// Create an event system with no modules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the module called `name`, creating it if needed.
    pub fn add_module(&mut self, name: &str) -> &mut Module {
        self.modules.entry(name.to_string()).or_insert_with(|| {
            info!(module = name, "module added");
            Module::new(name)
        })
    }

    /// The module called `name`, if any.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Look up the registration for `module.node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownModule`] or [`GraphError::UnknownNode`].
    pub fn registration(&self, module: &str, node: &str) -> Result<&NodeRegistration, GraphError> {
        self.module(module)
            .ok_or_else(|| GraphError::UnknownModule(module.to_string()))?
            .node(node)
            .ok_or_else(|| GraphError::UnknownNode {
                module: module.to_string(),
                node: node.to_string(),
            })
    }

    /// Create an instance of `module.node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownModule`] or [`GraphError::UnknownNode`].
    pub fn instantiate(&self, module: &str, node: &str) -> Result<Box<dyn Node>, GraphError> {
        Ok(self.registration(module, node)?.instantiate())
    }

    /// Validate `args` against `module.node`'s signature, then build an
    /// instance and run it once.
    ///
    /// # Errors
    ///
    /// Returns a lookup or validation [`GraphError`] without running the
    /// node, or [`GraphError::NodeFailed`] wrapping the node's own error.
    pub fn execute(&self, module: &str, node: &str, args: &mut NodeArgs) -> Result<(), GraphError> {
        let registration = self.registration(module, node)?;
        args.validate(registration.signature())?;

        debug!(module, node, inputs = args.inputs().len(), "executing node");
        registration
            .instantiate()
            .execute(args)
            .map_err(|source| GraphError::NodeFailed {
                module: module.to_string(),
                node: node.to_string(),
                source,
            })
    }

    /// Every registered node kind as `(module, node)`, sorted.
    #[must_use]
    pub fn node_kinds(&self) -> Vec<(&str, &str)> {
        self.modules
            .values()
            .flat_map(|m| m.node_names().map(move |n| (m.name(), n)))
            .collect()
    }

    /// Number of modules.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::NodeError;
    use crate::value::{NodeValue, PinType};

    struct Double;

    impl Node for Double {
        fn signature() -> NodeSignature {
            NodeSignature::new()
                .input("value", PinType::Int)
                .output("result", PinType::Int)
        }

        fn execute(&self, args: &mut NodeArgs) -> Result<(), NodeError> {
            let v = args.input_int(0)?;
            args.set_output(0, NodeValue::Int(v * 2))?;
            Ok(())
        }
    }

    struct Fails;

    impl Node for Fails {
        fn signature() -> NodeSignature {
            NodeSignature::new()
        }

        fn execute(&self, _args: &mut NodeArgs) -> Result<(), NodeError> {
            Err("boom".into())
        }
    }

    #[test]
    fn test_empty_event_system() {
        let events = EventSystem::new();
        assert_eq!(events.module_count(), 0);
        assert!(events.node_kinds().is_empty());
    }

    #[test]
    fn test_add_module_is_get_or_create() {
        let mut events = EventSystem::new();
        events.add_module("math").register_node("double", || Double);
        events.add_module("math");
        assert_eq!(events.module_count(), 1);
        assert_eq!(events.module("math").map(Module::len), Some(1));
    }

    #[test]
    fn test_register_records_signature() {
        let mut events = EventSystem::new();
        events.add_module("math").register_node("double", || Double);
        let reg = events.registration("math", "double").unwrap();
        assert_eq!(reg.name(), "double");
        assert_eq!(reg.signature(), &Double::signature());
    }

    #[test]
    fn test_reregistering_replaces() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);

        let mut events = EventSystem::new();
        let module = events.add_module("math");
        module.register_node("double", || Double);
        module.register_node("double", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Double
        });
        assert_eq!(module.len(), 1);

        events.instantiate("math", "double").unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_execute_runs_fresh_instance() {
        let mut events = EventSystem::new();
        events.add_module("math").register_node("double", || Double);

        let mut args = NodeArgs::new(vec![NodeValue::Int(21)]);
        events.execute("math", "double", &mut args).unwrap();
        assert_eq!(args.output(0), Some(&NodeValue::Int(42)));
    }

    #[test]
    fn test_execute_validates_before_running() {
        let mut events = EventSystem::new();
        events.add_module("math").register_node("double", || Double);

        let mut args = NodeArgs::new(vec![NodeValue::from("21")]);
        let err = events.execute("math", "double", &mut args).unwrap_err();
        assert!(matches!(err, GraphError::TypeMismatch { index: 0, .. }));
    }

    #[test]
    fn test_execute_unknown_names() {
        let mut events = EventSystem::new();
        events.add_module("math").register_node("double", || Double);
        let mut args = NodeArgs::default();

        assert!(matches!(
            events.execute("logic", "and", &mut args),
            Err(GraphError::UnknownModule(m)) if m == "logic"
        ));
        assert!(matches!(
            events.execute("math", "triple", &mut args),
            Err(GraphError::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_node_failure_is_wrapped() {
        let mut events = EventSystem::new();
        events.add_module("debug").register_node("fails", || Fails);

        let err = events
            .execute("debug", "fails", &mut NodeArgs::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "node debug.fails failed: boom");
    }

    #[test]
    fn test_node_kinds_sorted() {
        let mut events = EventSystem::new();
        events.add_module("math").register_node("double", || Double);
        events.add_module("debug").register_node("fails", || Fails);
        assert_eq!(
            events.node_kinds(),
            vec![("debug", "fails"), ("math", "double")]
        );
    }
}
