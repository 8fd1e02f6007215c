//! One-shot node invocation from the command line.

use anyhow::{Result, bail};
use game_graph::{EventSystem, NodeArgs, NodeSignature, NodeValue, PinType};
use tracing::info;

/// Build inputs for `signature` from the command-line values.
///
/// Void pins get a trigger, int pins get `flag`, string pins get `name`.
pub fn build_args(signature: &NodeSignature, name: &str, flag: i32) -> Result<NodeArgs> {
    let inputs = signature
        .inputs
        .iter()
        .map(|pin| match pin.pin_type {
            PinType::Void => Ok(NodeValue::Void),
            PinType::Int => Ok(NodeValue::Int(flag)),
            PinType::String => Ok(NodeValue::from(name)),
            other => bail!("cannot supply pin `{}` of type {other} from the command line", pin.name),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(NodeArgs::new(inputs))
}

/// Execute `module.node` once with inputs built by [`build_args`].
pub fn fire(events: &EventSystem, module: &str, node: &str, name: &str, flag: i32) -> Result<()> {
    let registration = events.registration(module, node)?;
    let mut args = build_args(registration.signature(), name, flag)?;
    events.execute(module, node, &mut args)?;
    info!(module, node, name, flag, "node executed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use game_gpg::{
        AchievementDef, AchievementService, GRANT_ACHIEVEMENT, GpgConfig, INCREMENT_ACHIEVEMENT,
        LocalAchievements, MODULE_NAME, initialize_gpg_module,
    };

    use super::*;

    fn setup() -> (EventSystem, Arc<LocalAchievements>) {
        let config =
            GpgConfig::from_achievements(vec![AchievementDef::new("first_patron", "CgkI-first")])
                .unwrap();
        let local = Arc::new(LocalAchievements::new());
        let mut events = EventSystem::new();
        let service: Arc<dyn AchievementService> = Arc::clone(&local) as _;
        initialize_gpg_module(&mut events, Arc::new(config), service);
        (events, local)
    }

    #[test]
    fn test_build_args_follows_signature() {
        let signature = NodeSignature::new()
            .input("trigger", PinType::Void)
            .input("flag", PinType::Int)
            .input("name", PinType::String);
        let args = build_args(&signature, "x", 3).unwrap();
        assert_eq!(
            args.inputs(),
            &[NodeValue::Void, NodeValue::Int(3), NodeValue::from("x")]
        );
    }

    #[test]
    fn test_build_args_rejects_unsupported_pin() {
        let signature = NodeSignature::new().input("speed", PinType::Float);
        assert!(build_args(&signature, "x", 1).is_err());
    }

    #[test]
    fn test_fire_grant_and_increment() {
        let (events, local) = setup();
        fire(&events, MODULE_NAME, GRANT_ACHIEVEMENT, "first_patron", 1).unwrap();
        fire(&events, MODULE_NAME, INCREMENT_ACHIEVEMENT, "first_patron", 0).unwrap();
        assert!(local.is_unlocked("CgkI-first"));
        assert_eq!(local.steps("CgkI-first"), 1);
    }

    #[test]
    fn test_fire_grant_with_zero_flag_is_noop() {
        let (events, local) = setup();
        fire(&events, MODULE_NAME, GRANT_ACHIEVEMENT, "first_patron", 0).unwrap();
        assert_eq!(local.unlocked_count(), 0);
    }

    #[test]
    fn test_fire_unknown_node_or_name() {
        let (events, local) = setup();
        assert!(fire(&events, MODULE_NAME, "explode", "first_patron", 1).is_err());
        assert!(fire(&events, MODULE_NAME, GRANT_ACHIEVEMENT, "nope", 1).is_err());
        assert_eq!(local.unlocked_count(), 0);
    }
}
