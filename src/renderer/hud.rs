//! Heads-up display: lives, points and queued overlays

use super::Surface;
use crate::assets::SpriteId;
use crate::sim::{GameWorld, HAlign, TextStyle, VAlign};

/// Gap between HUD icons
const ICON_SPACING: f32 = 5.0;

pub fn draw_hud(world: &GameWorld, surface: &mut dyn Surface) {
    let (width, height) = surface.size();

    if let (Some(player), Some(catalog)) = (&world.player, world.catalog()) {
        // Hearts right-aligned, one per life
        let heart = catalog.width(SpriteId::Heart) + ICON_SPACING;
        for i in 0..player.lives {
            surface.draw_sprite(SpriteId::Heart, width - heart * (i as f32 + 1.0), 5.0);
        }

        // Gem slots for every point needed, filled gems for points scored
        let gem = catalog.width(SpriteId::Gem) + ICON_SPACING;
        for i in 0..player.max_points {
            surface.draw_sprite(SpriteId::GemOutline, gem * i as f32, 2.0);
        }
        for i in 0..player.points {
            surface.draw_sprite(SpriteId::Gem, gem * i as f32, 2.0);
        }
    }

    let top_offset = world.config.grid.top_offset;
    for overlay in world.hud.overlays() {
        let (x, y) = text_anchor(&overlay.style, width, height, top_offset);
        surface.draw_text(&overlay.text, x, y, &overlay.style);
    }
}

/// Anchor point for a text style on a canvas of the given size
pub fn text_anchor(style: &TextStyle, width: f32, height: f32, top_offset: f32) -> (f32, f32) {
    let x = match style.align {
        HAlign::Left => style.padding,
        HAlign::Center => width / 2.0,
        HAlign::Right => width - style.padding,
    };
    let y = match style.baseline {
        VAlign::Top => style.padding + top_offset,
        VAlign::Middle => height / 2.0 + top_offset,
        VAlign::Bottom => height - style.padding,
    };
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteCatalog;
    use crate::renderer::{DrawOp, Recorder};
    use crate::settings::GameConfig;
    use crate::sim::Overlay;

    #[test]
    fn test_anchor_positions() {
        let banner = TextStyle::banner("red");
        assert_eq!(text_anchor(&banner, 505.0, 606.0, 50.0), (252.5, 353.0));

        let corner = TextStyle {
            align: HAlign::Right,
            baseline: VAlign::Bottom,
            padding: 4.0,
            ..Default::default()
        };
        assert_eq!(text_anchor(&corner, 505.0, 606.0, 50.0), (501.0, 602.0));

        let top_left = TextStyle {
            align: HAlign::Left,
            ..Default::default()
        };
        assert_eq!(text_anchor(&top_left, 505.0, 606.0, 50.0), (3.0, 53.0));
    }

    #[test]
    fn test_lives_and_points_icons() {
        let mut world =
            GameWorld::with_catalog(GameConfig::default(), 3, SpriteCatalog::standard()).unwrap();
        {
            let player = world.player.as_mut().unwrap();
            player.lives = 2;
            player.points = 3;
        }
        let mut recorder = Recorder::new(505.0, 606.0);
        draw_hud(&world, &mut recorder);

        assert_eq!(recorder.sprite_count(SpriteId::Heart), 2);
        assert_eq!(recorder.sprite_count(SpriteId::GemOutline), 10);
        assert_eq!(recorder.sprite_count(SpriteId::Gem), 3);
        // First heart hugs the right edge: 505 - (25 + 5)
        assert!(recorder.ops().contains(&DrawOp::Sprite {
            sprite: SpriteId::Heart,
            x: 475.0,
            y: 5.0
        }));
    }

    #[test]
    fn test_overlays_drawn_in_order() {
        let mut world =
            GameWorld::with_catalog(GameConfig::default(), 3, SpriteCatalog::standard()).unwrap();
        world.hud.push(Overlay::message("first", TextStyle::default()));
        world.hud.push(Overlay::game_over());
        let mut recorder = Recorder::new(505.0, 606.0);
        draw_hud(&world, &mut recorder);

        let texts: Vec<&str> = recorder.texts().collect();
        assert_eq!(texts, vec!["first", "GAME OVER!"]);
    }
}
