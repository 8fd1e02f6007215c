//! Achievement nodes.
//!
//! Both nodes hold shared handles to the configuration table and the
//! service facade. The name on input 1 is resolved through the table before
//! anything reaches the service, so an unknown name never produces a call.

use std::sync::Arc;

use game_graph::{Node, NodeArgs, NodeError, NodeSignature, PinType};
use tracing::debug;

use crate::config::GpgConfig;
use crate::error::GpgError;
use crate::service::AchievementService;

/// Inputs: `(trigger: void, name: string)`. Increments the named achievement.
pub struct IncrementAchievementNode {
    config: Arc<GpgConfig>,
    service: Arc<dyn AchievementService>,
}

impl IncrementAchievementNode {
    /// Create a node bound to the shared table and service.
    #[must_use]
    pub fn new(config: Arc<GpgConfig>, service: Arc<dyn AchievementService>) -> Self {
        Self { config, service }
    }

    /// # Errors
    ///
    /// Returns [`GpgError::UnknownAchievement`] if the name is not
    /// configured, [`GpgError::Graph`] if the name input is missing, or the
    /// service's own error.
    pub fn run(&self, args: &NodeArgs) -> Result<(), GpgError> {
        let name = args.input_string(1)?;
        let id = self.config.resolve(name)?;
        debug!(name, id, "incrementing achievement");
        self.service.increment(id)
    }
}

impl Node for IncrementAchievementNode {
    fn signature() -> NodeSignature {
        NodeSignature::new()
            .input("trigger", PinType::Void)
            .input("name", PinType::String)
    }

    fn execute(&self, args: &mut NodeArgs) -> Result<(), NodeError> {
        Ok(self.run(args)?)
    }
}

/// Inputs: `(flag: int, name: string)`. Unlocks the named achievement when
/// `flag > 0`; does nothing otherwise.
pub struct GrantAchievementNode {
    config: Arc<GpgConfig>,
    service: Arc<dyn AchievementService>,
}

impl GrantAchievementNode {
    /// Create a node bound to the shared table and service.
    #[must_use]
    pub fn new(config: Arc<GpgConfig>, service: Arc<dyn AchievementService>) -> Self {
        Self { config, service }
    }

    /// # Errors
    ///
    /// With `flag > 0`: [`GpgError::UnknownAchievement`] if the name is not
    /// configured, or the service's own error. A missing or mistyped flag is
    /// [`GpgError::Graph`].
    pub fn run(&self, args: &NodeArgs) -> Result<(), GpgError> {
        let flag = args.input_int(0)?;
        if flag <= 0 {
            return Ok(());
        }
        let name = args.input_string(1)?;
        let id = self.config.resolve(name)?;
        debug!(name, id, flag, "granting achievement");
        self.service.unlock(id)
    }
}

impl Node for GrantAchievementNode {
    fn signature() -> NodeSignature {
        NodeSignature::new()
            .input("flag", PinType::Int)
            .input("name", PinType::String)
    }

    fn execute(&self, args: &mut NodeArgs) -> Result<(), NodeError> {
        Ok(self.run(args)?)
    }
}

#[cfg(test)]
mod tests {
    use game_graph::NodeValue;

    use super::*;
    use crate::nats::AchievementOp;
    use crate::test_support::{RecordingService, config};

    fn increment_node(service: &Arc<RecordingService>) -> IncrementAchievementNode {
        IncrementAchievementNode::new(config(), Arc::clone(service) as Arc<dyn AchievementService>)
    }

    fn grant_node(service: &Arc<RecordingService>) -> GrantAchievementNode {
        GrantAchievementNode::new(config(), Arc::clone(service) as Arc<dyn AchievementService>)
    }

    fn increment_args(name: &str) -> NodeArgs {
        NodeArgs::new(vec![NodeValue::Void, NodeValue::from(name)])
    }

    fn grant_args(flag: i32, name: &str) -> NodeArgs {
        NodeArgs::new(vec![NodeValue::Int(flag), NodeValue::from(name)])
    }

    #[test]
    fn test_increment_known_name() {
        let service = Arc::new(RecordingService::default());
        increment_node(&service).run(&increment_args("lap_master")).unwrap();
        assert_eq!(
            service.calls(),
            vec![(AchievementOp::Increment, "CgkI-lap".to_string())]
        );
    }

    #[test]
    fn test_increment_unknown_name() {
        let service = Arc::new(RecordingService::default());
        let err = increment_node(&service).run(&increment_args("nope")).unwrap_err();
        assert!(matches!(err, GpgError::UnknownAchievement(name) if name == "nope"));
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_increment_missing_name_input() {
        let service = Arc::new(RecordingService::default());
        let err = increment_node(&service)
            .run(&NodeArgs::new(vec![NodeValue::Void]))
            .unwrap_err();
        assert!(matches!(err, GpgError::Graph(_)));
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_grant_non_positive_flag_does_nothing() {
        let service = Arc::new(RecordingService::default());
        let node = grant_node(&service);
        for flag in [0, -1, i32::MIN] {
            node.run(&grant_args(flag, "first_patron")).unwrap();
            node.run(&grant_args(flag, "nope")).unwrap();
        }
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_grant_positive_flag_known_name() {
        let service = Arc::new(RecordingService::default());
        grant_node(&service).run(&grant_args(1, "first_patron")).unwrap();
        assert_eq!(
            service.calls(),
            vec![(AchievementOp::Unlock, "CgkI-first".to_string())]
        );
    }

    #[test]
    fn test_grant_positive_flag_unknown_name() {
        let service = Arc::new(RecordingService::default());
        let err = grant_node(&service).run(&grant_args(5, "nope")).unwrap_err();
        assert!(matches!(err, GpgError::UnknownAchievement(_)));
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_node_error_downcasts_to_gpg_error() {
        let service = Arc::new(RecordingService::default());
        let err = increment_node(&service)
            .execute(&mut increment_args("nope"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GpgError>(),
            Some(GpgError::UnknownAchievement(_))
        ));
    }
}
