//! In-memory surface that records draw calls

use super::Surface;
use crate::assets::SpriteId;
use crate::sim::TextStyle;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Sprite { sprite: SpriteId, x: f32, y: f32 },
    Text { text: String, x: f32, y: f32 },
}

/// Records every draw call; `frames` counts clears
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
    frames: u32,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            frames: 0,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Draw calls of the most recent frame
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }

    pub fn sprite_count(&self, id: SpriteId) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Sprite { sprite, .. } if *sprite == id))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Forget recorded calls, keeping the frame count
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.frames += 1;
        self.ops.push(DrawOp::Clear);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32) {
        self.ops.push(DrawOp::Sprite { sprite, x, y });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}
