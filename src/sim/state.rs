//! Game world and state machine
//!
//! The world owns the enemy pool, the player and the run phase. Until the
//! sprite catalog arrives it is empty and every system treats it as a no-op.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::board::Board;
use super::entity::{Enemy, Entity, Player};
use super::hud::{Hud, Overlay};
use crate::assets::SpriteCatalog;
use crate::error::GameResult;
use crate::settings::GameConfig;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lost,
    Won,
}

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Ended(Outcome),
}

impl GamePhase {
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        !self.is_running()
    }
}

/// Things that happened during a frame, drained by the scheduler for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PlayerHit { enemy_id: u32, lives: u8 },
    PlayerRespawned,
    PointScored { points: u32 },
    GameOver,
    Won { points: u32 },
    EnemyRetired { enemy_id: u32, replacement_id: u32 },
    EnemiesSeparated { leader_id: u32, trailer_id: u32 },
    Reset,
}

/// Everything the simulation owns
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub config: GameConfig,
    pub board: Board,
    pub enemies: Vec<Enemy>,
    /// `None` until the sprite catalog is available
    pub player: Option<Player>,
    pub phase: GamePhase,
    pub hud: Hud,
    pub events: Vec<GameEvent>,
    catalog: Option<SpriteCatalog>,
    rng: Pcg32,
    /// Set when an end-of-run collision wants its frame drawn before the overlay
    render_requested: bool,
    next_id: u32,
}

impl GameWorld {
    /// An empty world waiting for its sprites
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            board: Board::new(&config.grid),
            config,
            enemies: Vec::new(),
            player: None,
            phase: GamePhase::Running,
            hud: Hud::default(),
            events: Vec::new(),
            catalog: None,
            rng: Pcg32::seed_from_u64(seed),
            render_requested: false,
            next_id: 1,
        }
    }

    /// A populated world, ready to run
    pub fn with_catalog(config: GameConfig, seed: u64, catalog: SpriteCatalog) -> GameResult<Self> {
        let mut world = Self::new(config, seed);
        world.populate(catalog)?;
        Ok(world)
    }

    /// Take the sprite catalog and construct the player and initial enemies
    pub fn populate(&mut self, catalog: SpriteCatalog) -> GameResult<()> {
        let player = Player::new(&self.config, &catalog)?;
        let mut enemies = Vec::with_capacity(self.config.enemy_count);
        for _ in 0..self.config.enemy_count {
            let id = self.next_entity_id();
            enemies.push(Enemy::random(id, &mut self.rng, &self.config, &catalog)?);
        }
        self.catalog = Some(catalog);
        self.player = Some(player);
        self.enemies = enemies;
        log::info!(
            "World populated: {} enemies, {} lives, {} points to win, {} damage",
            self.enemies.len(),
            self.config.lives,
            self.config.max_points,
            self.config.damage_policy.as_str()
        );
        Ok(())
    }

    /// True once the player exists
    pub fn is_ready(&self) -> bool {
        self.player.is_some()
    }

    pub fn catalog(&self) -> Option<&SpriteCatalog> {
        self.catalog.as_ref()
    }

    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance every enemy and the player, replacing enemies that left the board
    pub fn update_entities(&mut self, dt: f32) {
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }

        let board = self.board;
        let retired: Vec<u32> = self
            .enemies
            .iter()
            .filter(|e| board.is_past_right(e.x()))
            .map(|e| e.id)
            .collect();
        if !retired.is_empty() {
            self.enemies.retain(|e| !board.is_past_right(e.x()));
            for enemy_id in retired {
                if let Some(replacement_id) = self.spawn_enemy() {
                    self.events.push(GameEvent::EnemyRetired {
                        enemy_id,
                        replacement_id,
                    });
                }
            }
        }

        if let Some(player) = self.player.as_mut() {
            player.update(dt);
        }
    }

    /// Append a fresh random enemy, returning its id
    fn spawn_enemy(&mut self) -> Option<u32> {
        let id = self.next_entity_id();
        let catalog = self.catalog.as_ref()?;
        match Enemy::random(id, &mut self.rng, &self.config, catalog) {
            Ok(enemy) => {
                self.enemies.push(enemy);
                Some(id)
            }
            Err(e) => {
                debug_assert!(false, "enemy sprite vanished from catalog: {e}");
                log::error!("Failed to spawn enemy: {e}");
                None
            }
        }
    }

    /// Take one life; ends the run on the last one
    pub fn hit_player(&mut self, enemy_id: u32) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.lives = player.lives.saturating_sub(1);
        let lives = player.lives;
        self.events.push(GameEvent::PlayerHit { enemy_id, lives });

        if player.is_dead() {
            self.end_run(Outcome::Lost);
        } else {
            player.respawn(&self.config.grid);
            self.events.push(GameEvent::PlayerRespawned);
        }
    }

    /// Award a crossing; wins the run at the threshold
    pub fn score_point(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.points = (player.points + 1).min(player.max_points);
        let points = player.points;
        self.events.push(GameEvent::PointScored { points });

        if player.has_won() {
            self.end_run(Outcome::Won);
        } else {
            player.respawn(&self.config.grid);
            self.events.push(GameEvent::PlayerRespawned);
        }
    }

    /// Running -> Ended. Requests one render before the overlay shows.
    fn end_run(&mut self, outcome: Outcome) {
        if self.phase.is_ended() {
            return;
        }
        self.phase = GamePhase::Ended(outcome);
        self.render_requested = true;
        match outcome {
            Outcome::Lost => {
                self.hud.stage(Overlay::game_over());
                self.events.push(GameEvent::GameOver);
            }
            Outcome::Won => {
                let points = self.player.as_ref().map(|p| p.points).unwrap_or(0);
                self.hud.stage(Overlay::won());
                self.events.push(GameEvent::Won { points });
            }
        }
    }

    /// Consume the forced-render request
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    /// Ended -> Running. Returns false (and does nothing) while running or not ready.
    pub fn reset(&mut self) -> bool {
        if self.phase.is_running() {
            return false;
        }
        let Some(catalog) = self.catalog.clone() else {
            return false;
        };
        // On failure the ended world is left as it was
        if let Err(e) = self.populate(catalog) {
            log::error!("Reset failed to repopulate world: {e}");
            return false;
        }
        self.hud.clear();
        self.render_requested = false;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Reset);
        true
    }
}
