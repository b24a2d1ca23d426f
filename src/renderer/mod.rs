//! Rendering module
//!
//! The simulation never draws directly. Each frame is described to a
//! `Surface`: the browser canvas in production, a `Recorder` in tests and
//! headless runs.

pub mod hud;
pub mod recorder;

pub use recorder::{DrawOp, Recorder};

use crate::assets::SpriteId;
use crate::sim::{Entity, GameWorld, TextStyle};

/// Drawing primitives the host provides
pub trait Surface {
    /// Canvas size in pixels
    fn size(&self) -> (f32, f32);

    fn clear(&mut self);

    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32);

    /// Filled and stroked text anchored at (x, y) according to the style's alignment
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}

/// Draw one complete frame: board, enemies, player, HUD
pub fn render_frame(world: &GameWorld, surface: &mut dyn Surface) {
    surface.clear();
    draw_board(world, surface);

    for enemy in &world.enemies {
        enemy.render(surface);
    }
    if let Some(player) = &world.player {
        player.render(surface);
    }

    hud::draw_hud(world, surface);
}

fn draw_board(world: &GameWorld, surface: &mut dyn Surface) {
    let grid = &world.config.grid;
    for row in 0..grid.rows {
        let sprite = grid.row_sprite(row);
        for col in 0..grid.cols {
            surface.draw_sprite(
                sprite,
                col as f32 * grid.tile_width,
                row as f32 * grid.tile_height,
            );
        }
    }
}
