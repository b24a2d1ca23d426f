//! Bug Crossing - a tile-board crossing arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, game state machine)
//! - `scheduler`: Frame driver tying update and render together
//! - `renderer`: Drawing through the `Surface` abstraction
//! - `platform`: Input mapping and the browser frontend
//! - `assets`: Sprite identifiers and collision metadata
//! - `settings`: Data-driven game configuration

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use assets::{SpriteCatalog, SpriteId, SpriteMeta};
pub use error::{GameError, GameResult};
pub use scheduler::{FrameRequest, Scheduler};
pub use settings::{DamagePolicy, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Nominal frame step used when the host has no clock (headless runs)
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
    /// Largest frame step fed to the simulation by default
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Tile grid. Tiles overlap vertically, 83 is the effective row height.
    pub const TILE_WIDTH: f32 = 101.0;
    pub const TILE_HEIGHT: f32 = 83.0;
    /// Space above the first row that belongs to the tile artwork
    pub const TILE_TOP_OFFSET: f32 = 50.0;
    pub const BOARD_COLS: u32 = 5;
    pub const BOARD_ROWS: u32 = 6;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 505.0;
    pub const CANVAS_HEIGHT: f32 = 606.0;

    /// Player defaults
    pub const PLAYER_LIVES: u8 = 5;
    pub const PLAYER_MAX_POINTS: u32 = 10;
    pub const PLAYER_START_COL: f32 = 3.0;
    pub const PLAYER_START_ROW: i32 = 6;
    /// Linear scale of the player's hitbox (bounding boxes over-approximate the sprite)
    pub const PLAYER_HITBOX_SCALE: f32 = 0.8;

    /// Enemy defaults
    pub const ENEMY_COUNT: usize = 4;
    /// Base enemy speed (pixels/s), scaled by 0.5, 1.0 or 1.5 per enemy
    pub const ENEMY_BASE_SPEED: f32 = 200.0;
    /// Stone rows enemies travel on (inclusive)
    pub const ENEMY_FIRST_ROW: i32 = 2;
    pub const ENEMY_LAST_ROW: i32 = 4;
}
