//! Per-frame simulation step
//!
//! Advances the world by one variable-length frame: input, motion, collisions.

use super::collision;
use super::entity::Direction;
use super::state::GameWorld;

/// Input captured since the previous frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Most recent move key; later keys overwrite earlier ones
    pub step: Option<Direction>,
    /// Restart requested (only honoured once the run has ended)
    pub restart: bool,
}

impl TickInput {
    /// Clear one-shot inputs after a frame consumed them
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut GameWorld, input: &TickInput, dt: f32) {
    if input.restart && world.phase.is_ended() && world.reset() {
        log::info!("Run restarted");
        // The fresh run starts from the spawn tile; keys from the ended run are dropped
        return;
    }

    // Nothing moves once the run has ended
    if world.phase.is_ended() {
        return;
    }

    if let Some(direction) = input.step {
        let grid = world.config.grid;
        if let Some(player) = world.player.as_mut() {
            player.handle_input(direction, &grid);
        }
    }

    world.update_entities(dt);
    collision::resolve(world);
}
