//! Dino Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dino_runner::Engine;
    use dino_runner::Runner;
    use dino_runner::audio::WebAudio;
    use dino_runner::platform::storage::LocalStore;
    use dino_runner::platform::web::RafScheduler;
    use dino_runner::renderer::CanvasSink;

    /// Everything the browser callbacks need
    struct Game {
        runner: Runner<RafScheduler>,
        sink: CanvasSink,
    }

    type Shared = Rc<RefCell<Option<Game>>>;

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    /// Run `f` against the game if it has been built
    fn with_game(game: &Shared, f: impl FnOnce(&mut Game)) {
        if let Some(g) = game.borrow_mut().as_mut() {
            f(g);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            return;
        }

        log::info!("Dino Runner starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };
        let Some(sink) = CanvasSink::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let game: Shared = Rc::new(RefCell::new(None));

        // Frame callback, reused for every requestAnimationFrame
        let frame_cb = {
            let game = game.clone();
            Closure::<dyn FnMut(f64)>::new(move |time: f64| {
                with_game(&game, |g| {
                    g.runner.frame(time, &mut g.sink);
                });
            })
        };
        let mut scheduler = RafScheduler::new();
        scheduler.set_callback(frame_cb.as_ref().unchecked_ref::<js_sys::Function>().clone());
        frame_cb.forget();

        let seed = js_sys::Date::now() as u64;
        let engine = Engine::new(seed, Box::new(LocalStore::new()), Box::new(WebAudio::new()));
        let mut runner = Runner::new(engine, scheduler);
        let mut sink = sink;

        // Menu screen before the first frame arrives
        let now = now_ms();
        runner.engine().render(now, &mut sink);
        runner.start(now);
        *game.borrow_mut() = Some(Game { runner, sink });

        setup_input_handlers(&canvas, game.clone());
        setup_visibility(game);

        log::info!("Dino Runner running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                with_game(&game, |g| {
                    if g.runner.engine_mut().key_down(&event.code()) {
                        event.prevent_default();
                    }
                });
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                with_game(&game, |g| {
                    g.runner.engine_mut().key_up(&event.code());
                });
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                with_game(&game, |g| g.runner.engine_mut().pointer_start());
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                with_game(&game, |g| g.runner.engine_mut().pointer_start());
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events will never arrive for held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                with_game(&game, |g| g.runner.engine_mut().release_all());
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Stop ticking while the tab is hidden
    fn setup_visibility(game: Shared) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let hidden = document_clone.visibility_state() == web_sys::VisibilityState::Hidden;
            with_game(&game, |g| {
                if hidden {
                    g.runner.stop();
                } else {
                    g.runner.start(now_ms());
                }
            });
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dino Runner (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    autoplay();
}

/// Headless session with a naive autopilot, driven frame by frame
#[cfg(not(target_arch = "wasm32"))]
fn autoplay() {
    use dino_runner::audio::NullAudio;
    use dino_runner::consts::PLAYER_X;
    use dino_runner::platform::{ManualScheduler, MemoryStore};
    use dino_runner::renderer::DrawCommand;
    use dino_runner::sim::{GamePhase, ObstacleKind};
    use dino_runner::{Engine, Runner};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 20_000;

    let engine = Engine::new(2024, Box::new(MemoryStore::new()), Box::new(NullAudio));
    let mut runner = Runner::new(engine, ManualScheduler::new());
    let mut frame: Vec<DrawCommand> = Vec::new();

    runner.start(0.0);
    runner.engine_mut().key_down("Space");
    runner.engine_mut().key_up("Space");

    for i in 1..=MAX_FRAMES {
        let engine = runner.engine_mut();
        let threat = engine
            .state()
            .obstacles
            .iter()
            .filter(|o| o.pos.x > PLAYER_X)
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
            .map(|o| (o.kind, o.pos.x - PLAYER_X));

        // Low birds clip a ducking runner too, so jump everything but high birds
        match threat {
            Some((kind, d)) if kind != ObstacleKind::BirdHigh && d < 90.0 => {
                engine.key_down("Space");
                engine.key_up("Space");
            }
            _ => {}
        }

        frame.clear();
        runner.frame(i as f64 * FRAME_MS, &mut frame);
        if runner.engine().phase() == GamePhase::GameOver {
            break;
        }
    }

    runner.stop();
    let engine = runner.engine();
    log::info!(
        "Autopilot finished: score {} (best {}), {} draw commands in last frame",
        engine.score(),
        engine.high_score(),
        frame.len()
    );
    println!("Final score: {}", engine.score());
}
