//! Errors for the achievements bridge.

use game_graph::GraphError;

/// Errors raised by the achievements configuration, facade, or nodes.
#[derive(Debug, thiserror::Error)]
pub enum GpgError {
    /// The achievement name is not in the configuration table.
    #[error("unknown achievement: {0}")]
    UnknownAchievement(String),

    /// The configuration table is malformed.
    #[error("invalid achievements config: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read achievements config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for the table.
    #[error("failed to parse achievements config: {0}")]
    Json(#[from] serde_json::Error),

    /// A node's inputs could not be read.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The backend can no longer accept requests.
    #[error("achievements service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to encode an outgoing event to MessagePack.
    #[error("failed to encode achievement event: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// NATS connection error.
    #[error("NATS connection error: {0}")]
    Connect(#[from] async_nats::ConnectError),

    /// NATS publish error.
    #[error("NATS publish error: {0}")]
    Publish(#[from] async_nats::PublishError),
}
