//! Frame scheduler
//!
//! The host calls `frame` from its next-frame callback (requestAnimationFrame
//! in the browser) and keeps calling while it returns `Continue`.

use crate::renderer::{self, Surface};
use crate::sim::{GameEvent, GameWorld, TickInput, tick};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Schedule another frame
    Continue,
    /// The run ended; wait for a restart before scheduling again
    Stop,
}

/// Drives update and render at the host's cadence
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    /// Host timestamp of the previous frame (milliseconds)
    last_frame_time: Option<f64>,
    /// Cap on a single step, `None` for raw wall-clock time
    max_dt: Option<f32>,
    frames: u64,
    stopped: bool,
}

impl Scheduler {
    pub fn new(max_dt: Option<f32>) -> Self {
        Self {
            max_dt,
            ..Default::default()
        }
    }

    /// Begin (or resume) timing at `now`; the next frame sees dt = 0
    pub fn start(&mut self, now: f64) {
        self.last_frame_time = Some(now);
        self.stopped = false;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seconds since the previous frame, clamped to `max_dt`
    fn elapsed(&self, now: f64) -> f32 {
        let dt = match self.last_frame_time {
            Some(last) => ((now - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        match self.max_dt {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    /// Run one frame: update, optional forced render, overlay commit, render
    pub fn frame(
        &mut self,
        world: &mut GameWorld,
        input: &TickInput,
        now: f64,
        surface: &mut dyn Surface,
    ) -> FrameRequest {
        // Time spent ended (waiting for restart) must not reach the simulation
        let dt = if world.phase.is_ended() {
            0.0
        } else {
            self.elapsed(now)
        };

        tick(world, input, dt);

        // The collision that ended the run is shown before its overlay
        if world.take_render_request() {
            renderer::render_frame(world, surface);
        }
        world.hud.commit();
        renderer::render_frame(world, surface);

        self.last_frame_time = Some(now);
        self.frames += 1;
        log_events(world);

        if world.phase.is_running() {
            self.stopped = false;
            FrameRequest::Continue
        } else {
            self.stopped = true;
            FrameRequest::Stop
        }
    }
}

fn log_events(world: &mut GameWorld) {
    for event in world.events.drain(..) {
        match event {
            GameEvent::GameOver => log::info!("Game over"),
            GameEvent::Won { points } => log::info!("Won with {points} points"),
            GameEvent::Reset => log::info!("World reset"),
            GameEvent::PlayerHit { enemy_id, lives } => {
                log::debug!("Player hit by enemy {enemy_id}, {lives} lives left")
            }
            GameEvent::PointScored { points } => log::debug!("Crossing! {points} points"),
            other => log::trace!("{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{SpriteCatalog, SpriteId};
    use crate::renderer::{DrawOp, Recorder};
    use crate::settings::GameConfig;
    use crate::sim::{Direction, GamePhase, Outcome, OverlayKind, Tile};

    fn world() -> GameWorld {
        GameWorld::with_catalog(GameConfig::default(), 42, SpriteCatalog::standard()).unwrap()
    }

    fn recorder() -> Recorder {
        Recorder::new(505.0, 606.0)
    }

    #[test]
    fn test_dt_from_timestamps() {
        let mut world = world();
        world.enemies.truncate(1);
        world.enemies[0].body.pos.x = 0.0;
        world.enemies[0].speed = 200.0;
        let mut scheduler = Scheduler::new(None);
        let mut surface = recorder();

        scheduler.start(1000.0);
        scheduler.frame(&mut world, &TickInput::default(), 1000.0, &mut surface);
        assert_eq!(world.enemies[0].x(), 0.0);

        scheduler.frame(&mut world, &TickInput::default(), 1250.0, &mut surface);
        assert_eq!(world.enemies[0].x(), 50.0);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut world = world();
        world.enemies.truncate(1);
        world.enemies[0].body.pos.x = 0.0;
        world.enemies[0].speed = 200.0;
        let mut scheduler = Scheduler::new(Some(0.1));
        let mut surface = recorder();

        scheduler.start(0.0);
        // A five second stall only advances one clamped step
        scheduler.frame(&mut world, &TickInput::default(), 5000.0, &mut surface);
        assert_eq!(world.enemies[0].x(), 20.0);
    }

    #[test]
    fn test_quiet_frame_continues() {
        let mut world = world();
        let mut scheduler = Scheduler::new(Some(0.1));
        let mut surface = recorder();
        scheduler.start(0.0);

        let request = scheduler.frame(&mut world, &TickInput::default(), 16.0, &mut surface);

        assert_eq!(request, FrameRequest::Continue);
        let player = world.player.as_ref().unwrap();
        assert_eq!((player.lives, player.points), (5, 0));
        assert_eq!(surface.frames(), 1);
        assert_eq!(scheduler.frames(), 1);
        assert!(world.events.is_empty());
    }

    #[test]
    fn test_fatal_collision_renders_before_overlay() {
        let mut world = world();
        let pos = world.player.as_ref().unwrap().body.pos;
        world.player.as_mut().unwrap().lives = 1;
        world.enemies.truncate(1);
        world.enemies[0].body.pos = pos;
        world.enemies[0].speed = 0.0;
        let mut scheduler = Scheduler::new(Some(0.1));
        let mut surface = recorder();
        scheduler.start(0.0);

        let request = scheduler.frame(&mut world, &TickInput::default(), 16.0, &mut surface);

        assert_eq!(request, FrameRequest::Stop);
        assert!(scheduler.is_stopped());
        assert_eq!(world.phase, GamePhase::Ended(Outcome::Lost));
        assert_eq!(world.hud.count(OverlayKind::GameOver), 1);
        // Forced frame without the overlay, then the final frame with it
        assert_eq!(surface.frames(), 2);
        let texts: Vec<&str> = surface.texts().collect();
        assert_eq!(texts, vec!["GAME OVER!"]);
        assert!(matches!(surface.last_frame().last(), Some(DrawOp::Text { .. })));
    }

    #[test]
    fn test_final_crossing_wins_and_stops() {
        let mut world = world();
        world.enemies.clear();
        let grid = world.config.grid;
        let player = world.player.as_mut().unwrap();
        player.points = player.max_points - 1;
        player.body.spawn(Tile::new(3.0, 2), &grid);
        let mut scheduler = Scheduler::new(Some(0.1));
        let mut surface = recorder();
        scheduler.start(0.0);

        let input = TickInput {
            step: Some(Direction::Up),
            ..Default::default()
        };
        let request = scheduler.frame(&mut world, &input, 16.0, &mut surface);

        assert_eq!(request, FrameRequest::Stop);
        let player = world.player.as_ref().unwrap();
        assert_eq!(player.points, player.max_points);
        assert_eq!(world.phase, GamePhase::Ended(Outcome::Won));
        assert_eq!(world.hud.count(OverlayKind::Won), 1);
        assert_eq!(surface.sprite_count(SpriteId::Gem), 10 + 10);
    }

    #[test]
    fn test_restart_resumes_loop() {
        let mut world = world();
        world.player.as_mut().unwrap().lives = 1;
        world.hit_player(0);
        let mut scheduler = Scheduler::new(Some(0.1));
        let mut surface = recorder();
        scheduler.start(0.0);
        assert_eq!(
            scheduler.frame(&mut world, &TickInput::default(), 16.0, &mut surface),
            FrameRequest::Stop
        );

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        scheduler.start(60_000.0);
        let request = scheduler.frame(&mut world, &restart, 60_000.0, &mut surface);

        assert_eq!(request, FrameRequest::Continue);
        assert!(!scheduler.is_stopped());
        assert!(world.hud.overlays().is_empty());
        assert_eq!(world.player.as_ref().unwrap().lives, world.config.lives);
    }
}
