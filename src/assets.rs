//! Sprite identifiers and metadata
//!
//! The catalog is filled before any entity is constructed. The standard
//! catalog carries the art's known dimensions; the web frontend overwrites
//! width/height with the decoded image sizes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::sim::geometry::InsetBox;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    WaterBlock,
    StoneBlock,
    GrassBlock,
    EnemyBug,
    CharBoy,
    Heart,
    GemOutline,
    Gem,
}

impl SpriteId {
    pub const ALL: [SpriteId; 8] = [
        SpriteId::WaterBlock,
        SpriteId::StoneBlock,
        SpriteId::GrassBlock,
        SpriteId::EnemyBug,
        SpriteId::CharBoy,
        SpriteId::Heart,
        SpriteId::GemOutline,
        SpriteId::Gem,
    ];

    /// Image path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            SpriteId::WaterBlock => "images/water-block.png",
            SpriteId::StoneBlock => "images/stone-block.png",
            SpriteId::GrassBlock => "images/grass-block.png",
            SpriteId::EnemyBug => "images/enemy-bug.png",
            SpriteId::CharBoy => "images/char-boy.png",
            SpriteId::Heart => "images/Heart-small.png",
            SpriteId::GemOutline => "images/Gem Orange outline-small.png",
            SpriteId::Gem => "images/Gem Orange-small.png",
        }
    }
}

/// Pixel size plus optional collision data for one sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteMeta {
    pub width: f32,
    pub height: f32,
    /// Collision inset, only present for sprites that collide
    #[serde(default)]
    pub bounding_box: Option<InsetBox>,
    /// Vertical offset of the point where the character's feet touch the tile
    #[serde(default)]
    pub feet_center_y: Option<f32>,
}

impl SpriteMeta {
    pub const fn image(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            bounding_box: None,
            feet_center_y: None,
        }
    }

    pub const fn character(width: f32, height: f32, bounding_box: InsetBox, feet_center_y: f32) -> Self {
        Self {
            width,
            height,
            bounding_box: Some(bounding_box),
            feet_center_y: Some(feet_center_y),
        }
    }
}

/// Everything an entity needs from its sprite, resolved once at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionSprite {
    pub id: SpriteId,
    pub width: f32,
    pub height: f32,
    pub hitbox: InsetBox,
    pub feet_center_y: f32,
}

/// Sprite metadata keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteCatalog {
    sprites: HashMap<SpriteId, SpriteMeta>,
}

impl SpriteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata for the stock art
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert(SpriteId::WaterBlock, SpriteMeta::image(101.0, 171.0));
        catalog.insert(SpriteId::StoneBlock, SpriteMeta::image(101.0, 171.0));
        catalog.insert(SpriteId::GrassBlock, SpriteMeta::image(101.0, 171.0));
        catalog.insert(
            SpriteId::EnemyBug,
            SpriteMeta::character(101.0, 171.0, InsetBox::new(1.0, 77.0, 98.0, 66.0), 127.0),
        );
        catalog.insert(
            SpriteId::CharBoy,
            SpriteMeta::character(101.0, 171.0, InsetBox::new(17.0, 63.0, 67.0, 76.0), 133.0),
        );
        catalog.insert(SpriteId::Heart, SpriteMeta::image(25.0, 42.0));
        catalog.insert(SpriteId::GemOutline, SpriteMeta::image(24.0, 41.0));
        catalog.insert(SpriteId::Gem, SpriteMeta::image(24.0, 41.0));
        catalog
    }

    /// Parse a catalog from JSON (a map of sprite id to metadata)
    pub fn from_json(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, id: SpriteId, meta: SpriteMeta) {
        self.sprites.insert(id, meta);
    }

    pub fn get(&self, id: SpriteId) -> Option<&SpriteMeta> {
        self.sprites.get(&id)
    }

    /// Record the decoded pixel size of a sprite, keeping its collision data
    pub fn set_size(&mut self, id: SpriteId, width: f32, height: f32) {
        let meta = self
            .sprites
            .entry(id)
            .or_insert_with(|| SpriteMeta::image(width, height));
        meta.width = width;
        meta.height = height;
    }

    /// Width of a sprite, 0 if unknown
    pub fn width(&self, id: SpriteId) -> f32 {
        self.get(id).map(|m| m.width).unwrap_or(0.0)
    }

    /// True once every sprite the game draws has metadata
    pub fn is_complete(&self) -> bool {
        SpriteId::ALL.iter().all(|id| self.sprites.contains_key(id))
    }

    /// Resolve the collision data a moving entity needs
    pub fn collision_sprite(&self, id: SpriteId) -> GameResult<CollisionSprite> {
        let meta = self.get(id).ok_or(GameError::MissingSprite(id))?;
        let hitbox = meta.bounding_box.ok_or(GameError::MissingMetadata {
            sprite: id,
            field: "bounding_box",
        })?;
        let feet_center_y = meta.feet_center_y.ok_or(GameError::MissingMetadata {
            sprite: id,
            field: "feet_center_y",
        })?;
        Ok(CollisionSprite {
            id,
            width: meta.width,
            height: meta.height,
            hitbox,
            feet_center_y,
        })
    }
}
