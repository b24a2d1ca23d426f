//! Error types
//!
//! Construction-time failures only. The per-frame simulation never fails:
//! not-ready state is a no-op and broken invariants are debug assertions.

use thiserror::Error;

use crate::assets::SpriteId;

/// Errors that can occur while building or configuring a game.
#[derive(Error, Debug)]
pub enum GameError {
    /// A sprite has no entry in the catalog.
    #[error("sprite not loaded: {0:?}")]
    MissingSprite(SpriteId),

    /// A sprite used by an entity lacks collision metadata.
    #[error("sprite {sprite:?} has no {field} metadata")]
    MissingMetadata {
        /// The sprite being inspected.
        sprite: SpriteId,
        /// The missing field.
        field: &'static str,
    },

    /// Configuration values that cannot produce a playable board.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed configuration or metadata JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Browser API failure, carrying the JS error text.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Convenience alias used across the crate.
pub type GameResult<T> = Result<T, GameError>;
