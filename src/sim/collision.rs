//! Collision resolution
//!
//! Runs once per frame after motion and before rendering. The step order
//! matters: enemy hits may respawn the player before the boundary check, and
//! enemy separation mutates positions later enemies are tested against.

use super::board::Containment;
use super::entity::Entity;
use super::geometry::Aabb;
use super::state::{GameEvent, GameWorld};
use crate::settings::DamagePolicy;

/// Resolve every collision for the current frame
pub fn resolve(world: &mut GameWorld) {
    // Player not constructed yet (assets loading) or the run is over
    let Some(player) = world.player.as_ref() else {
        return;
    };
    if world.phase.is_ended() {
        return;
    }

    // Every enemy is tested against where the player stood at the start of the pass
    let player_box = player.bounding_box();
    let mut hits = 0u32;

    for i in 0..world.enemies.len() {
        if world.phase.is_running() && player_box.overlaps(&world.enemies[i].bounding_box()) {
            let allowed = match world.config.damage_policy {
                DamagePolicy::PerEnemy => true,
                DamagePolicy::OncePerFrame => hits == 0,
            };
            if allowed {
                hits += 1;
                let enemy_id = world.enemies[i].id;
                world.hit_player(enemy_id);
            }
        }

        separate_enemies(world, i);
    }

    if world.phase.is_running() {
        contain_player(world);
    }
}

/// Keep enemies sharing a row from stacking: the trailing one falls in
/// directly behind the leader at the leader's speed.
fn separate_enemies(world: &mut GameWorld, i: usize) {
    for j in 0..world.enemies.len() {
        if j == i || world.enemies[j].row != world.enemies[i].row {
            continue;
        }
        let a: Aabb = world.enemies[i].bounding_box();
        let b: Aabb = world.enemies[j].bounding_box();
        if !a.overlaps(&b) {
            continue;
        }

        // Ties go to the enemy being resolved
        let (leader, trailer) = if world.enemies[j].x() > world.enemies[i].x() {
            (j, i)
        } else {
            (i, j)
        };
        let speed = world.enemies[leader].speed;
        let x = world.enemies[leader].x() - world.enemies[leader].body.width();
        let leader_id = world.enemies[leader].id;

        let trailing = &mut world.enemies[trailer];
        trailing.speed = speed;
        trailing.body.pos.x = x;
        let trailer_id = trailing.id;

        world
            .events
            .push(GameEvent::EnemiesSeparated { leader_id, trailer_id });
    }
}

/// Keep the player on the board and score a crossing
fn contain_player(world: &mut GameWorld) {
    let Some(player) = world.player.as_mut() else {
        return;
    };
    if world.board.contain(&mut player.body) == Containment::Crossed {
        world.score_point();
    }
}
