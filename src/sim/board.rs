//! Tile grid and playfield boundary
//!
//! Row 1 is water (the goal), the rows beneath it are traversable. Tiles
//! overlap vertically: each row is `tile_height` tall but the artwork is
//! drawn with `top_offset` pixels of headroom above it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Tile};
use crate::assets::SpriteId;
use crate::consts::*;

/// Static grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    pub tile_width: f32,
    pub tile_height: f32,
    pub top_offset: f32,
    pub cols: u32,
    pub rows: u32,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            top_offset: TILE_TOP_OFFSET,
            cols: BOARD_COLS,
            rows: BOARD_ROWS,
        }
    }
}

impl TileGrid {
    /// Sprite position that puts the feet anchor on the tile's row anchor
    pub fn sprite_origin(&self, tile: Tile, feet_center_y: f32) -> Vec2 {
        let sprite_offset_y = feet_center_y - (self.tile_height / 2.0 + self.top_offset);
        Vec2::new(
            (tile.col - 1.0) * self.tile_width,
            (tile.row - 1) as f32 * self.tile_height - sprite_offset_y.round(),
        )
    }

    /// Artwork for a 0-based row: water on top, grass on the last two, stone between
    pub fn row_sprite(&self, row: u32) -> SpriteId {
        if row == 0 {
            SpriteId::WaterBlock
        } else if row + 2 >= self.rows {
            SpriteId::GrassBlock
        } else {
            SpriteId::StoneBlock
        }
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.tile_width
    }
}

/// Result of keeping the player on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    /// The player's feet reached the water row
    Crossed,
}

/// Playfield edges, fixed after construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub left: f32,
    pub right: f32,
    /// Foot line of the first traversable row's upper edge
    pub top: f32,
    pub bottom: f32,
    tile_height: f32,
}

impl Board {
    pub fn new(grid: &TileGrid) -> Self {
        Self {
            left: 0.0,
            right: grid.width(),
            top: grid.top_offset + grid.tile_height,
            bottom: grid.top_offset + grid.rows as f32 * grid.tile_height,
            tile_height: grid.tile_height,
        }
    }

    /// Clamp a body horizontally, push it back up from below the board and
    /// report a crossing when its feet rise past the top edge.
    pub fn contain(&self, body: &mut Body) -> Containment {
        let max_x = (self.right - body.width()).max(self.left);
        body.pos.x = body.pos.x.clamp(self.left, max_x);

        if body.foot_y() > self.bottom {
            body.pos.y -= self.tile_height;
        }

        if body.foot_y() < self.top {
            Containment::Crossed
        } else {
            Containment::Inside
        }
    }

    /// Enemies leave the board once their left edge passes the right edge
    #[inline]
    pub fn is_past_right(&self, x: f32) -> bool {
        x > self.right
    }
}
