//! Registration of the achievement nodes as the `gpg` module.

use std::sync::Arc;

use game_graph::EventSystem;
use tracing::info;

use crate::config::GpgConfig;
use crate::nodes::{GrantAchievementNode, IncrementAchievementNode};
use crate::service::AchievementService;

/// Module name graphs use to reference these nodes.
pub const MODULE_NAME: &str = "gpg";

/// Node name of [`IncrementAchievementNode`].
pub const INCREMENT_ACHIEVEMENT: &str = "increment_achievement";
/// Node name of [`GrantAchievementNode`].
pub const GRANT_ACHIEVEMENT: &str = "grant_achievement";

/// Register `increment_achievement` and `grant_achievement` under the `gpg`
/// module of `event_system`.
///
/// Every node instance the engine creates shares `config` and `service`.
/// Calling this again re-registers the same two node kinds with the new
/// handles.
pub fn initialize_gpg_module(
    event_system: &mut EventSystem,
    config: Arc<GpgConfig>,
    service: Arc<dyn AchievementService>,
) {
    let achievements = config.len();
    let module = event_system.add_module(MODULE_NAME);

    let (increment_config, increment_service) = (Arc::clone(&config), Arc::clone(&service));
    module.register_node(INCREMENT_ACHIEVEMENT, move || {
        IncrementAchievementNode::new(
            Arc::clone(&increment_config),
            Arc::clone(&increment_service),
        )
    });

    module.register_node(GRANT_ACHIEVEMENT, move || {
        GrantAchievementNode::new(Arc::clone(&config), Arc::clone(&service))
    });

    info!(
        module = MODULE_NAME,
        nodes = module.len(),
        achievements,
        "gpg module initialised"
    );
}

#[cfg(test)]
mod tests {
    use game_graph::{GraphError, Node, NodeArgs, NodeValue};

    use super::*;
    use crate::error::GpgError;
    use crate::nats::AchievementOp;
    use crate::service::LocalAchievements;
    use crate::test_support::{RecordingService, config};

    fn setup() -> (EventSystem, Arc<RecordingService>) {
        let service = Arc::new(RecordingService::default());
        let mut events = EventSystem::new();
        initialize_gpg_module(
            &mut events,
            config(),
            Arc::clone(&service) as Arc<dyn AchievementService>,
        );
        (events, service)
    }

    #[test]
    fn test_registers_exactly_two_node_kinds() {
        let (events, _) = setup();
        assert_eq!(
            events.node_kinds(),
            vec![(MODULE_NAME, GRANT_ACHIEVEMENT), (MODULE_NAME, INCREMENT_ACHIEVEMENT)]
        );
    }

    #[test]
    fn test_second_initialisation_keeps_two_kinds() {
        let (mut events, _) = setup();
        initialize_gpg_module(&mut events, config(), Arc::new(LocalAchievements::new()));
        assert_eq!(events.module_count(), 1);
        assert_eq!(events.module(MODULE_NAME).map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_signatures_registered() {
        let (events, _) = setup();
        let increment = events.registration(MODULE_NAME, INCREMENT_ACHIEVEMENT).unwrap();
        assert_eq!(increment.signature(), &IncrementAchievementNode::signature());
        let grant = events.registration(MODULE_NAME, GRANT_ACHIEVEMENT).unwrap();
        assert_eq!(grant.signature(), &GrantAchievementNode::signature());
    }

    #[test]
    fn test_execute_increment_through_event_system() {
        let (events, service) = setup();
        let mut args = NodeArgs::new(vec![NodeValue::Void, NodeValue::from("lap_master")]);
        events
            .execute(MODULE_NAME, INCREMENT_ACHIEVEMENT, &mut args)
            .unwrap();
        assert_eq!(
            service.calls(),
            vec![(AchievementOp::Increment, "CgkI-lap".to_string())]
        );
    }

    #[test]
    fn test_execute_unknown_name_reports_lookup_failure() {
        let (events, service) = setup();
        let mut args = NodeArgs::new(vec![NodeValue::Int(1), NodeValue::from("nope")]);
        let err = events
            .execute(MODULE_NAME, GRANT_ACHIEVEMENT, &mut args)
            .unwrap_err();
        let GraphError::NodeFailed { node, source, .. } = err else {
            panic!("expected NodeFailed");
        };
        assert_eq!(node, GRANT_ACHIEVEMENT);
        assert!(matches!(
            source.downcast_ref::<GpgError>(),
            Some(GpgError::UnknownAchievement(_))
        ));
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_execute_rejects_mistyped_flag() {
        let (events, service) = setup();
        let mut args = NodeArgs::new(vec![NodeValue::from("1"), NodeValue::from("first_patron")]);
        let err = events
            .execute(MODULE_NAME, GRANT_ACHIEVEMENT, &mut args)
            .unwrap_err();
        assert!(matches!(err, GraphError::TypeMismatch { index: 0, .. }));
        assert!(service.calls().is_empty());
    }

    #[test]
    fn test_instances_share_service() {
        let (events, service) = setup();
        for _ in 0..3 {
            let node = events.instantiate(MODULE_NAME, GRANT_ACHIEVEMENT).unwrap();
            node.execute(&mut NodeArgs::new(vec![
                NodeValue::Int(1),
                NodeValue::from("first_patron"),
            ]))
            .unwrap();
        }
        assert_eq!(service.calls().len(), 3);
    }
}
