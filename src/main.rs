//! Bug Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use bug_crossing::platform::web::{self, CanvasSurface};
    use bug_crossing::platform::Command;
    use bug_crossing::sim::{GameWorld, TickInput};
    use bug_crossing::{FrameRequest, GameResult, Scheduler, SpriteCatalog};

    /// Game instance shared by the frame and keyboard callbacks
    struct Game {
        world: GameWorld,
        scheduler: Scheduler,
        surface: CanvasSurface,
        input: TickInput,
    }

    impl Game {
        fn frame(&mut self, time: f64) -> FrameRequest {
            let input = std::mem::take(&mut self.input);
            self.scheduler
                .frame(&mut self.world, &input, time, &mut self.surface)
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bug Crossing starting...");

        if let Err(e) = start().await {
            log::error!("Failed to start: {e}");
        }
    }

    async fn start() -> GameResult<()> {
        let document = web::document()?;
        let config = web::load_config(&document);
        let canvas = web::create_canvas(&document, "wall", config.canvas_width, config.canvas_height)?;

        // Entities need sprite sizes, so nothing is built until every image decodes
        let (catalog, images) = web::load_sprites(SpriteCatalog::standard()).await?;
        let surface = CanvasSurface::new(&canvas, images)?;

        let seed = config.seed.unwrap_or(js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {}", seed);
        let max_dt = config.max_frame_dt;
        let world = GameWorld::with_catalog(config, seed, catalog)?;

        let game = Rc::new(RefCell::new(Game {
            world,
            scheduler: Scheduler::new(max_dt),
            surface,
            input: TickInput::default(),
        }));

        setup_keyboard(game.clone());

        game.borrow_mut().scheduler.start(js_sys::Date::now());
        request_animation_frame(game);

        log::info!("Bug Crossing running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let command = Command::from_key(&event.key())
                .or_else(|| Command::from_key_code(event.key_code()));
            let Some(command) = command else {
                return;
            };

            let resume = {
                let mut g = game.borrow_mut();
                // Moves made on the end screen must not carry into the next run
                if matches!(command, Command::Move(_)) && g.world.phase.is_ended() {
                    return;
                }
                command.apply(&mut g.input);
                // The loop sleeps after a run ends; a restart has to wake it
                if command == Command::Restart && g.scheduler.is_stopped() {
                    g.scheduler.start(js_sys::Date::now());
                    true
                } else {
                    false
                }
            };
            if resume {
                request_animation_frame(game.clone());
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        // Same clock as the scheduler's start() so the first dt is not skewed
        let request = game.borrow_mut().frame(js_sys::Date::now());
        if request == FrameRequest::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bug Crossing (native) starting...");
    log::info!("Native mode runs a headless session - use `trunk serve` for the playable web version");

    if let Err(e) = headless::run() {
        log::error!("Headless session failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session: keep stepping up and report how the run went
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use bug_crossing::consts::NOMINAL_DT;
    use bug_crossing::renderer::Recorder;
    use bug_crossing::sim::{Direction, GamePhase, GameWorld, TickInput};
    use bug_crossing::{FrameRequest, GameConfig, GameResult, Scheduler, SpriteCatalog};

    const MAX_FRAMES: u32 = 60 * 120;
    /// Frames between scripted moves
    const MOVE_EVERY: u32 = 20;

    pub fn run() -> GameResult<()> {
        let config = match std::env::var("BUG_CROSSING_CONFIG") {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)
                    .map_err(|e| bug_crossing::GameError::InvalidConfig(format!("{path}: {e}")))?;
                GameConfig::from_json(&json)?
            }
            Err(_) => GameConfig::default(),
        };
        let seed = config.seed.unwrap_or(0x5eed);
        let mut surface = Recorder::new(config.canvas_width, config.canvas_height);
        let mut scheduler = Scheduler::new(config.max_frame_dt);
        let mut world = GameWorld::with_catalog(config, seed, SpriteCatalog::standard())?;

        let frame_ms = f64::from(NOMINAL_DT) * 1000.0;
        scheduler.start(0.0);
        let mut frame = 0;
        while frame < MAX_FRAMES {
            frame += 1;
            let input = TickInput {
                step: (frame % MOVE_EVERY == 0).then_some(Direction::Up),
                restart: false,
            };
            // Draw calls are only needed for the frame count
            surface.reset();
            if scheduler.frame(&mut world, &input, frame as f64 * frame_ms, &mut surface)
                == FrameRequest::Stop
            {
                break;
            }
        }

        let (lives, points) = world
            .player
            .as_ref()
            .map(|p| (p.lives, p.points))
            .unwrap_or_default();
        let outcome = match world.phase {
            GamePhase::Running => "still running".to_string(),
            GamePhase::Ended(outcome) => format!("{outcome:?}"),
        };
        println!(
            "{outcome} after {} frames ({} drawn): {lives} lives, {points} points",
            scheduler.frames(),
            surface.frames()
        );
        Ok(())
    }
}
