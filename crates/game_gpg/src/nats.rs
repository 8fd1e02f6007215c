//! NATS-backed achievements facade.
//!
//! Node execution is synchronous, publishing is not. [`NatsAchievements`]
//! therefore only enqueues: each call becomes an [`OutgoingEvent`] on an
//! unbounded channel, and [`publish_loop`] drains that channel onto NATS as
//! MessagePack [`AchievementEvent`]s.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::GpgError;
use crate::service::AchievementService;

/// Default NATS server URL.
pub const DEFAULT_NATS_URL: &str = "nats://localhost:4222";

/// The environment variable used to override the NATS URL.
pub const NATS_URL_ENV: &str = "NATS_URL";

/// Subject for increment requests. Game → backend.
pub const INCREMENT_SUBJECT: &str = "game.gpg.achievement.increment";

/// Subject for unlock requests. Game → backend.
pub const UNLOCK_SUBJECT: &str = "game.gpg.achievement.unlock";

/// Which backend operation an event requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementOp {
    Increment,
    Unlock,
}

impl AchievementOp {
    /// NATS subject requests of this kind are published on.
    #[must_use]
    pub fn subject(self) -> &'static str {
        match self {
            AchievementOp::Increment => INCREMENT_SUBJECT,
            AchievementOp::Unlock => UNLOCK_SUBJECT,
        }
    }
}

/// Payload published for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEvent {
    /// Service id of the achievement.
    pub achievement_id: String,
    /// Identifies the game client that sent the request.
    pub client_id: String,
}

/// A queued request awaiting publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEvent {
    pub op: AchievementOp,
    pub event: AchievementEvent,
}

/// Achievements facade that forwards requests over NATS.
#[derive(Debug, Clone)]
pub struct NatsAchievements {
    client_id: String,
    tx: mpsc::UnboundedSender<OutgoingEvent>,
}

impl NatsAchievements {
    /// A facade plus the receiving end of its queue.
    ///
    /// Use this to drive publication yourself; [`NatsAchievements::connect`]
    /// wires it to a live connection.
    #[must_use]
    pub fn channel(client_id: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<OutgoingEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let facade = Self {
            client_id: client_id.into(),
            tx,
        };
        (facade, rx)
    }

    /// Connect to NATS at `url` and spawn the publishing task.
    ///
    /// The client id is a fresh v4 UUID. The task ends once every clone of
    /// the returned facade has been dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GpgError::Connect`] if the connection cannot be established.
    pub async fn connect(url: &str) -> Result<(Self, JoinHandle<()>), GpgError> {
        info!(url, "connecting to NATS");
        let client = async_nats::connect(url).await?;
        info!("NATS connection established");

        let (facade, rx) = Self::channel(Uuid::new_v4().to_string());
        let handle = tokio::spawn(publish_loop(client, rx));
        Ok((facade, handle))
    }

    /// Id sent with every event from this facade.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    fn enqueue(&self, op: AchievementOp, id: &str) -> Result<(), GpgError> {
        let outgoing = OutgoingEvent {
            op,
            event: AchievementEvent {
                achievement_id: id.to_string(),
                client_id: self.client_id.clone(),
            },
        };
        self.tx
            .send(outgoing)
            .map_err(|_| GpgError::ServiceUnavailable("publisher has shut down".to_string()))
    }
}

impl AchievementService for NatsAchievements {
    fn increment(&self, id: &str) -> Result<(), GpgError> {
        self.enqueue(AchievementOp::Increment, id)
    }

    fn unlock(&self, id: &str) -> Result<(), GpgError> {
        self.enqueue(AchievementOp::Unlock, id)
    }
}

/// Encode an event for the wire.
///
/// # Errors
///
/// Returns [`GpgError::Encode`] if serialisation fails.
pub fn encode_event(event: &AchievementEvent) -> Result<Vec<u8>, GpgError> {
    Ok(rmp_serde::to_vec_named(event)?)
}

/// Publish queued events until the queue closes, then flush.
///
/// A failed publish is logged and skipped; it does not stop the loop.
pub async fn publish_loop(
    client: async_nats::Client,
    mut rx: mpsc::UnboundedReceiver<OutgoingEvent>,
) {
    while let Some(outgoing) = rx.recv().await {
        if let Err(e) = publish_one(&client, &outgoing).await {
            warn!(
                error = %e,
                subject = outgoing.op.subject(),
                achievement_id = outgoing.event.achievement_id,
                "failed to publish achievement event"
            );
        }
    }
    if let Err(e) = client.flush().await {
        warn!(error = %e, "failed to flush NATS connection");
    }
    info!("achievement publisher stopped");
}

async fn publish_one(client: &async_nats::Client, outgoing: &OutgoingEvent) -> Result<(), GpgError> {
    let payload = encode_event(&outgoing.event)?;
    client
        .publish(outgoing.op.subject().to_string(), payload.into())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subjects() {
        assert_eq!(AchievementOp::Increment.subject(), "game.gpg.achievement.increment");
        assert_eq!(AchievementOp::Unlock.subject(), "game.gpg.achievement.unlock");
    }

    #[test]
    fn test_calls_are_queued_in_order() {
        let (facade, mut rx) = NatsAchievements::channel("client-1");
        facade.increment("CgkI-lap").unwrap();
        facade.unlock("CgkI-first").unwrap();

        let first = rx.try_recv().unwrap();
        assert_eq!(first.op, AchievementOp::Increment);
        assert_eq!(first.event.achievement_id, "CgkI-lap");
        assert_eq!(first.event.client_id, "client-1");

        let second = rx.try_recv().unwrap();
        assert_eq!(second.op, AchievementOp::Unlock);
        assert_eq!(second.event.achievement_id, "CgkI-first");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_queue_is_unavailable() {
        let (facade, rx) = NatsAchievements::channel("client-1");
        drop(rx);
        let err = facade.unlock("x").unwrap_err();
        assert!(matches!(err, GpgError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_event_wire_format() {
        let event = AchievementEvent {
            achievement_id: "CgkI-first".to_string(),
            client_id: "c".to_string(),
        };
        let bytes = encode_event(&event).unwrap();
        let restored: AchievementEvent = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(event, restored);
    }
}
