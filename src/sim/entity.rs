//! Entities: the shared body record plus the enemy and player behaviors

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::TileGrid;
use super::geometry::Aabb;
use crate::assets::{CollisionSprite, SpriteCatalog, SpriteId};
use crate::error::GameResult;
use crate::renderer::Surface;
use crate::settings::GameConfig;

/// A grid cell, 1-based. Columns may be fractional or off-board for spawn slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub col: f32,
    pub row: i32,
}

impl Tile {
    pub const fn new(col: f32, row: i32) -> Self {
        Self { col, row }
    }
}

/// One-tile move requested by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Displacement in pixels for one step on the grid
    pub fn step(&self, grid: &TileGrid) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-grid.tile_width, 0.0),
            Direction::Right => Vec2::new(grid.tile_width, 0.0),
            Direction::Up => Vec2::new(0.0, -grid.tile_height),
            Direction::Down => Vec2::new(0.0, grid.tile_height),
        }
    }
}

/// Spatial and sprite state shared by every entity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left of the sprite image
    pub pos: Vec2,
    pub sprite: CollisionSprite,
}

impl Body {
    /// A body placed on `tile`
    pub fn spawned(sprite: CollisionSprite, tile: Tile, grid: &TileGrid) -> Self {
        Self {
            pos: grid.sprite_origin(tile, sprite.feet_center_y),
            sprite,
        }
    }

    pub fn spawn(&mut self, tile: Tile, grid: &TileGrid) {
        self.pos = grid.sprite_origin(tile, self.sprite.feet_center_y);
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.sprite.width
    }

    /// Y coordinate where the character's feet touch the ground
    #[inline]
    pub fn foot_y(&self) -> f32 {
        self.pos.y + self.sprite.feet_center_y
    }

    pub fn bounding_box(&self) -> Aabb {
        self.sprite.hitbox.at(self.pos)
    }

    /// Hitbox shrunk around its centre by `factor`
    pub fn scaled_bounding_box(&self, factor: f32) -> Aabb {
        self.sprite.hitbox.shrink(factor).at(self.pos)
    }
}

/// Behavior every drawable, colliding thing provides
pub trait Entity {
    fn body(&self) -> &Body;

    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32);

    fn bounding_box(&self) -> Aabb {
        self.body().bounding_box()
    }

    fn render(&self, surface: &mut dyn Surface) {
        let body = self.body();
        surface.draw_sprite(body.sprite.id, body.pos.x, body.pos.y);
    }
}

/// A bug crawling left to right along one row
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub body: Body,
    /// Pixels per second
    pub speed: f32,
    /// Row the enemy travels on; enemies on the same row share `y`
    pub row: i32,
}

impl Enemy {
    pub fn new(id: u32, sprite: CollisionSprite, tile: Tile, speed: f32, grid: &TileGrid) -> Self {
        Self {
            id,
            body: Body::spawned(sprite, tile, grid),
            speed,
            row: tile.row,
        }
    }

    /// Enemy with a random start slot, row and speed
    pub fn random<R: Rng>(
        id: u32,
        rng: &mut R,
        config: &GameConfig,
        catalog: &SpriteCatalog,
    ) -> GameResult<Self> {
        let sprite = catalog.collision_sprite(SpriteId::EnemyBug)?;
        // Off-board start slots at columns -2.5, -2 and -1.5
        let col = -3.0 + rng.random_range(1..=3) as f32 / 2.0;
        let row = rng.random_range(config.enemy_first_row..=config.enemy_last_row);
        // Half, full or one-and-a-half base speed
        let factor = rng.random_range(1..=3) as f32 / 2.0;
        let speed = config.enemy_base_speed * factor;
        Ok(Self::new(id, sprite, Tile::new(col, row), speed, &config.grid))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.body.pos.x
    }
}

impl Entity for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.pos.x += self.speed * dt;
    }
}

/// The character crossing the board
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub lives: u8,
    pub points: u32,
    pub max_points: u32,
    pub start: Tile,
    /// Hitbox scale compensating for boxes over-approximating the silhouette
    pub hitbox_scale: f32,
    /// Step applied on the next update; a newer input overwrites an older one
    pending: Option<Vec2>,
}

impl Player {
    pub fn new(config: &GameConfig, catalog: &SpriteCatalog) -> GameResult<Self> {
        let sprite = catalog.collision_sprite(SpriteId::CharBoy)?;
        Ok(Self {
            body: Body::spawned(sprite, config.player_start, &config.grid),
            lives: config.lives,
            points: 0,
            max_points: config.max_points,
            start: config.player_start,
            hitbox_scale: config.hitbox_scale,
            pending: None,
        })
    }

    /// Queue a one-tile move, replacing any move not yet applied
    pub fn handle_input(&mut self, direction: Direction, grid: &TileGrid) {
        self.pending = Some(direction.step(grid));
    }

    pub fn pending_step(&self) -> Option<Vec2> {
        self.pending
    }

    /// Back to the start tile; lives and points are kept
    pub fn respawn(&mut self, grid: &TileGrid) {
        self.body.spawn(self.start, grid);
        self.pending = None;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    #[inline]
    pub fn has_won(&self) -> bool {
        self.points >= self.max_points
    }
}

impl Entity for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    /// Moves are discrete, so `dt` is unused
    fn update(&mut self, _dt: f32) {
        if let Some(step) = self.pending.take() {
            self.body.pos += step;
        }
    }

    fn bounding_box(&self) -> Aabb {
        self.body.scaled_bounding_box(self.hitbox_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy_at(x: f32, row: i32, speed: f32) -> Enemy {
        let config = GameConfig::default();
        let sprite = SpriteCatalog::standard()
            .collision_sprite(SpriteId::EnemyBug)
            .unwrap();
        let mut enemy = Enemy::new(1, sprite, Tile::new(1.0, row), speed, &config.grid);
        enemy.body.pos.x = x;
        enemy
    }

    #[test]
    fn test_enemy_moves_with_dt() {
        let mut enemy = enemy_at(0.0, 2, 200.0);
        let y = enemy.body.pos.y;
        enemy.update(0.5);
        assert_eq!(enemy.x(), 100.0);
        assert_eq!(enemy.body.pos.y, y);
    }

    #[test]
    fn test_enemy_zero_dt_is_noop() {
        let mut enemy = enemy_at(37.5, 3, 300.0);
        enemy.update(0.0);
        assert_eq!(enemy.x(), 37.5);
    }

    #[test]
    fn test_random_enemy_ranges() {
        let config = GameConfig::default();
        let catalog = SpriteCatalog::standard();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..200 {
            let enemy = Enemy::random(id, &mut rng, &config, &catalog).unwrap();
            assert!([100.0, 200.0, 300.0].contains(&enemy.speed));
            assert!((2..=4).contains(&enemy.row));
            let col = enemy.x() / config.grid.tile_width + 1.0;
            assert!([-2.5, -2.0, -1.5].contains(&col), "unexpected start column {col}");
            assert_eq!(enemy.body.pos, config.grid.sprite_origin(Tile::new(col, enemy.row), 127.0));
        }
    }

    #[test]
    fn test_player_applies_one_step_then_clears() {
        let config = GameConfig::default();
        let mut player = Player::new(&config, &SpriteCatalog::standard()).unwrap();
        let start = player.body.pos;

        player.handle_input(Direction::Up, &config.grid);
        player.update(0.016);
        assert_eq!(player.body.pos, start + Vec2::new(0.0, -83.0));

        player.update(0.016);
        assert_eq!(player.body.pos, start + Vec2::new(0.0, -83.0));
        assert!(player.pending_step().is_none());
    }

    #[test]
    fn test_player_last_input_wins() {
        let config = GameConfig::default();
        let mut player = Player::new(&config, &SpriteCatalog::standard()).unwrap();
        let start = player.body.pos;

        player.handle_input(Direction::Up, &config.grid);
        player.handle_input(Direction::Left, &config.grid);
        player.update(0.016);
        assert_eq!(player.body.pos, start + Vec2::new(-101.0, 0.0));
    }

    #[test]
    fn test_player_hitbox_is_shrunk() {
        let config = GameConfig::default();
        let player = Player::new(&config, &SpriteCatalog::standard()).unwrap();
        let full = player.body.bounding_box();
        let scaled = player.bounding_box();
        assert!(scaled.width() < full.width());
        assert!(scaled.left > full.left && scaled.right < full.right);
        assert!(scaled.top > full.top && scaled.bottom < full.bottom);
    }

    #[test]
    fn test_respawn_keeps_score() {
        let config = GameConfig::default();
        let mut player = Player::new(&config, &SpriteCatalog::standard()).unwrap();
        let start = player.body.pos;
        player.lives = 2;
        player.points = 4;
        player.body.pos += Vec2::new(101.0, -166.0);
        player.handle_input(Direction::Down, &config.grid);

        player.respawn(&config.grid);
        assert_eq!(player.body.pos, start);
        assert_eq!((player.lives, player.points), (2, 4));
        assert!(player.pending_step().is_none());
    }
}
