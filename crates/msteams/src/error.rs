//! Error types for card construction.

use thiserror::Error;

use crate::events::HookEventType;

/// Errors that can occur while building or encoding a card.
#[derive(Debug, Error)]
pub enum CardError {
    /// A review card was requested for an event type that is not a review
    #[error("unknown pull request review event: {0}")]
    UnknownReviewEvent(HookEventType),

    /// A textual event tag that names no known event type
    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    /// Event decoding or card encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
