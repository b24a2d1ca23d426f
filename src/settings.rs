//! Game configuration
//!
//! Every field has a default so a partial JSON document is enough to tweak
//! a single value.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, GameResult};
use crate::sim::board::TileGrid;
use crate::sim::entity::Tile;

/// How many lives a single collision pass may take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DamagePolicy {
    /// Every overlapping enemy takes a life
    #[default]
    PerEnemy,
    /// At most one life per frame regardless of how many enemies overlap
    OncePerFrame,
}

impl DamagePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DamagePolicy::PerEnemy => "per-enemy",
            DamagePolicy::OncePerFrame => "once-per-frame",
        }
    }
}

/// Tunable gameplay values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Board ===
    pub grid: TileGrid,
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    pub lives: u8,
    pub max_points: u32,
    pub player_start: Tile,
    /// Linear scale applied to the player's hitbox (0, 1]
    pub hitbox_scale: f32,

    // === Enemies ===
    pub enemy_count: usize,
    /// Pixels per second before the per-enemy factor
    pub enemy_base_speed: f32,
    pub enemy_first_row: i32,
    pub enemy_last_row: i32,

    // === Rules ===
    pub damage_policy: DamagePolicy,
    /// Cap on a single frame's dt in seconds; `None` feeds wall-clock time through unclamped
    pub max_frame_dt: Option<f32>,
    /// RNG seed; the host picks one when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: TileGrid::default(),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            lives: PLAYER_LIVES,
            max_points: PLAYER_MAX_POINTS,
            player_start: Tile::new(PLAYER_START_COL, PLAYER_START_ROW),
            hitbox_scale: PLAYER_HITBOX_SCALE,

            enemy_count: ENEMY_COUNT,
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_first_row: ENEMY_FIRST_ROW,
            enemy_last_row: ENEMY_LAST_ROW,

            damage_policy: DamagePolicy::PerEnemy,
            max_frame_dt: Some(MAX_FRAME_DT),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that cannot produce a playable board
    pub fn validate(&self) -> GameResult<()> {
        let grid = &self.grid;
        if grid.cols == 0 || grid.rows < 2 {
            return Err(invalid(format!(
                "board needs at least 1 column and 2 rows, got {}x{}",
                grid.cols, grid.rows
            )));
        }
        if grid.tile_width <= 0.0 || grid.tile_height <= 0.0 {
            return Err(invalid(format!(
                "tile size must be positive, got {}x{}",
                grid.tile_width, grid.tile_height
            )));
        }
        if self.lives == 0 {
            return Err(invalid("lives must be at least 1".into()));
        }
        if self.max_points == 0 {
            return Err(invalid("max_points must be at least 1".into()));
        }
        if !(self.hitbox_scale > 0.0 && self.hitbox_scale <= 1.0) {
            return Err(invalid(format!(
                "hitbox_scale must be in (0, 1], got {}",
                self.hitbox_scale
            )));
        }
        if self.enemy_base_speed < 0.0 {
            return Err(invalid(format!(
                "enemy_base_speed must not be negative, got {}",
                self.enemy_base_speed
            )));
        }
        let rows = grid.rows as i32;
        if self.enemy_first_row > self.enemy_last_row
            || self.enemy_first_row < 2
            || self.enemy_last_row > rows
        {
            return Err(invalid(format!(
                "enemy rows {}..={} must be a non-empty range within 2..={}",
                self.enemy_first_row, self.enemy_last_row, rows
            )));
        }
        let start = self.player_start;
        if start.row < 2 || start.row > rows || start.col < 1.0 || start.col > grid.cols as f32 {
            return Err(invalid(format!(
                "player start ({}, {}) is not a traversable tile",
                start.col, start.row
            )));
        }
        if let Some(max_dt) = self.max_frame_dt.filter(|dt| *dt <= 0.0) {
            return Err(invalid(format!("max_frame_dt must be positive, got {max_dt}")));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> GameError {
    GameError::InvalidConfig(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{"lives": 3, "damage_policy": "OncePerFrame"}"#).unwrap();
        assert_eq!(config.lives, 3);
        assert_eq!(config.damage_policy, DamagePolicy::OncePerFrame);
        assert_eq!(config.max_points, PLAYER_MAX_POINTS);
        assert_eq!(config.grid, TileGrid::default());
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let config = GameConfig {
            seed: Some(42),
            max_frame_dt: None,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cases = [
            r#"{"lives": 0}"#,
            r#"{"max_points": 0}"#,
            r#"{"hitbox_scale": 1.5}"#,
            r#"{"enemy_first_row": 4, "enemy_last_row": 2}"#,
            r#"{"enemy_first_row": 1}"#,
            r#"{"player_start": {"col": 3.0, "row": 1}}"#,
            r#"{"max_frame_dt": 0.0}"#,
        ];
        for json in cases {
            let err = GameConfig::from_json(json).unwrap_err();
            assert!(matches!(err, GameError::InvalidConfig(_)), "{json} gave {err}");
        }
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = GameConfig::from_json("{lives: 3").unwrap_err();
        assert!(matches!(err, GameError::Json(_)));
    }
}
