//! HUD overlay queue
//!
//! Messages are staged by the simulation and committed by the scheduler, so
//! a frame forced before the commit shows the board without the message.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    /// Canvas `textBaseline` value
    pub fn as_str(&self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Middle => "middle",
            VAlign::Bottom => "bottom",
        }
    }
}

/// How an overlay is drawn and where it is anchored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: String,
    pub fill: String,
    pub stroke: String,
    pub line_width: f32,
    pub align: HAlign,
    pub baseline: VAlign,
    pub padding: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "24pt 'Arial'".into(),
            fill: "white".into(),
            stroke: "black".into(),
            line_width: 1.0,
            align: HAlign::Center,
            baseline: VAlign::Top,
            padding: 3.0,
        }
    }
}

impl TextStyle {
    /// Large centred banner used for end-of-run messages
    pub fn banner(fill: &str) -> Self {
        Self {
            font: "80pt 'IMPACT'".into(),
            fill: fill.into(),
            stroke: "black".into(),
            line_width: 3.0,
            align: HAlign::Center,
            baseline: VAlign::Middle,
            padding: 1.0,
        }
    }
}

/// Kind tag so callers can tell overlays apart without comparing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayKind {
    GameOver,
    Won,
    Message,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub text: String,
    pub style: TextStyle,
}

impl Overlay {
    pub fn game_over() -> Self {
        Self {
            kind: OverlayKind::GameOver,
            text: "GAME OVER!".into(),
            style: TextStyle::banner("red"),
        }
    }

    pub fn won() -> Self {
        Self {
            kind: OverlayKind::Won,
            text: "YOU WON!".into(),
            style: TextStyle::banner("gold"),
        }
    }

    pub fn message(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            kind: OverlayKind::Message,
            text: text.into(),
            style,
        }
    }
}

/// Ordered overlays drawn on top of the board
#[derive(Debug, Clone, Default)]
pub struct Hud {
    overlays: Vec<Overlay>,
    staged: Vec<Overlay>,
}

impl Hud {
    /// Queue an overlay for the next commit
    pub fn stage(&mut self, overlay: Overlay) {
        self.staged.push(overlay);
    }

    /// Make staged overlays visible; returns how many were committed
    pub fn commit(&mut self) -> usize {
        let count = self.staged.len();
        self.overlays.append(&mut self.staged);
        count
    }

    /// Queue an overlay that is visible immediately
    pub fn push(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn count(&self, kind: OverlayKind) -> usize {
        self.overlays.iter().filter(|o| o.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.overlays.clear();
        self.staged.clear();
    }
}
