//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable iteration order (enemy pool order)
//! - No platform dependencies; drawing goes through `renderer::Surface`

pub mod board;
pub mod collision;
pub mod entity;
pub mod geometry;
pub mod hud;
pub mod state;
pub mod tick;

pub use board::{Board, Containment, TileGrid};
pub use collision::resolve;
pub use entity::{Body, Direction, Enemy, Entity, Player, Tile};
pub use geometry::{Aabb, InsetBox, overlap};
pub use hud::{HAlign, Hud, Overlay, OverlayKind, TextStyle, VAlign};
pub use state::{GameEvent, GamePhase, GameWorld, Outcome};
pub use tick::{TickInput, tick};
