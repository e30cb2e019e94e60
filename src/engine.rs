//! Engine instance and its frame loop
//!
//! `Engine` owns one game session: simulation state, held keys, and the
//! injected storage and audio backends. `Runner` pairs an engine with a
//! `FrameLoop` so the host only has to forward frame callbacks.

use crate::audio::{AudioSink, Cue};
use crate::consts::{HIT_CUE_VOLUME, JUMP_CUE_VOLUME, SCORE_CUE_VOLUME};
use crate::highscores::HighScore;
use crate::platform::{FrameLoop, FrameScheduler, InputTracker, Key, KeyValueStore};
use crate::renderer::{FrameInfo, RenderSink, draw_frame};
use crate::settings::Settings;
use crate::sim::{self, Action, GameEvent, GamePhase, GameState};

/// One game session
pub struct Engine {
    state: GameState,
    input: InputTracker,
    high_score: HighScore,
    settings: Settings,
    store: Box<dyn KeyValueStore>,
    audio: Box<dyn AudioSink>,
}

impl Engine {
    /// Create an engine on the menu. Reads the high score and settings once.
    pub fn new(seed: u64, store: Box<dyn KeyValueStore>, audio: Box<dyn AudioSink>) -> Self {
        let high_score = HighScore::load(store.as_ref());
        let settings = Settings::load(store.as_ref());
        log::info!("Engine created with seed {}", seed);
        Self {
            state: GameState::new(seed, high_score.best()),
            input: InputTracker::new(),
            high_score,
            settings,
            store,
            audio,
        }
    }

    /// Current floored score
    pub fn score(&self) -> u64 {
        self.state.display_score()
    }

    pub fn high_score(&self) -> u64 {
        self.state.high_score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Read-only view of the simulation
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace and persist settings
    pub fn set_settings(&mut self, settings: Settings) {
        settings.save(self.store.as_mut());
        self.settings = settings;
    }

    /// Key pressed, by DOM key code. Returns true if the key belongs to the
    /// game so the host can suppress its default action.
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        self.audio.unlock();
        if let Some(action) = self.input.key_down(key) {
            self.apply(action);
        }
        true
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        self.audio.unlock();
        self.input.key_up(key);
        true
    }

    /// Click or touch start
    pub fn pointer_start(&mut self) {
        self.audio.unlock();
        let action = self.input.pointer_start();
        self.apply(action);
    }

    /// Drop all held keys (focus lost)
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    fn apply(&mut self, action: Action) {
        sim::apply_action(&mut self.state, action);
        self.dispatch_events();
    }

    /// Run one simulation tick with `dt_ms` of elapsed wall time
    pub fn step(&mut self, dt_ms: f64) {
        let input = self.input.tick_input();
        sim::tick(&mut self.state, &input, dt_ms as f32);
        self.dispatch_events();
    }

    /// Emit the current frame
    pub fn render(&self, wall_ms: f64, sink: &mut dyn RenderSink) {
        let info = FrameInfo {
            wall_ms,
            reduced_motion: self.settings.reduced_motion,
        };
        draw_frame(&self.state, &info, sink);
    }

    /// Forward simulation events to audio and storage
    fn dispatch_events(&mut self) {
        let volume = self.settings.effective_volume();
        for event in self.state.drain_events() {
            match event {
                GameEvent::Jump => self.audio.play(Cue::Jump, JUMP_CUE_VOLUME * volume),
                GameEvent::ScoreMilestone => {
                    self.audio.play(Cue::Score, SCORE_CUE_VOLUME * volume)
                }
                GameEvent::Hit => self.audio.play(Cue::Hit, HIT_CUE_VOLUME * volume),
                GameEvent::NewHighScore(score) => {
                    self.high_score.record(score, self.store.as_mut());
                }
            }
        }
    }
}

/// An engine driven by a frame scheduler
pub struct Runner<S: FrameScheduler> {
    engine: Engine,
    frames: FrameLoop<S>,
}

impl<S: FrameScheduler> Runner<S> {
    pub fn new(engine: Engine, scheduler: S) -> Self {
        Self {
            engine,
            frames: FrameLoop::new(scheduler),
        }
    }

    /// Begin ticking. No-op if already running.
    pub fn start(&mut self, now_ms: f64) {
        if self.frames.is_running() {
            return;
        }
        self.frames.start(now_ms);
        if self.frames.is_running() {
            log::info!("Frame loop started");
        }
    }

    /// Stop ticking and cancel the pending frame. No-op if already stopped.
    pub fn stop(&mut self) {
        if self.frames.is_running() {
            log::info!("Frame loop stopped");
        }
        self.frames.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    /// Frame callback. Ticks and draws, returning false when the loop is
    /// stopped and nothing ran.
    pub fn frame(&mut self, now_ms: f64, sink: &mut dyn RenderSink) -> bool {
        let Some(dt) = self.frames.on_frame(now_ms) else {
            return false;
        };
        self.engine.step(dt);
        self.engine.render(now_ms, sink);
        true
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn frames(&self) -> &FrameLoop<S> {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::platform::{ManualScheduler, MemoryStore};

    fn engine() -> Engine {
        Engine::new(42, Box::new(MemoryStore::new()), Box::new(NullAudio))
    }

    #[test]
    fn test_engine_starts_on_menu() {
        let engine = engine();
        assert_eq!(engine.phase(), GamePhase::Menu);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.high_score(), 0);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut engine = engine();
        assert!(!engine.key_down("KeyA"));
        assert!(!engine.key_up("KeyA"));
        assert_eq!(engine.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_pointer_starts_game() {
        let mut engine = engine();
        engine.pointer_start();
        assert_eq!(engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_high_score_read_at_construction() {
        let store = MemoryStore::with_item(HighScore::STORAGE_KEY, "250");
        let engine = Engine::new(1, Box::new(store), Box::new(NullAudio));
        assert_eq!(engine.high_score(), 250);
    }

    #[test]
    fn test_runner_ticks_only_while_running() {
        let mut runner = Runner::new(engine(), ManualScheduler::new());
        let mut sink: Vec<crate::renderer::DrawCommand> = Vec::new();
        assert!(!runner.frame(16.0, &mut sink));
        assert!(sink.is_empty());

        runner.start(0.0);
        runner.engine_mut().key_down("Space");
        assert!(runner.frame(16.0, &mut sink));
        assert!(!sink.is_empty());
        assert!(runner.engine().state().score > 0.0);

        runner.stop();
        let score = runner.engine().state().score;
        assert!(!runner.frame(32.0, &mut sink));
        assert_eq!(runner.engine().state().score, score);
    }
}
