//! Dino Runner - An endless runner arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, obstacles, collisions, game state machine)
//! - `engine`: Engine instance wiring the sim to input, audio, storage and rendering
//! - `renderer`: Draw command generation for a 2D surface
//! - `platform`: Input tracking, key/value storage, frame scheduling
//! - `audio`: Fire-and-forget sound cues

pub mod audio;
pub mod engine;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::{Engine, Runner};
pub use highscores::HighScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// World (canvas) dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 200.0;

    /// Y coordinate of the ground line
    pub const GROUND_Y: f32 = 150.0;
    /// Ground texture repeats every this many pixels; offset wraps here
    pub const GROUND_WRAP: f32 = -24.0;

    /// Player sprite
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 47.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 25.0;
    /// Sprite top when standing on the ground line
    pub const PLAYER_GROUND_Y: f32 = GROUND_Y - PLAYER_HEIGHT;

    /// Player physics (pixels per tick)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_VELOCITY: f32 = -10.0;
    pub const MAX_FALL_SPEED: f32 = 15.0;

    /// Hitbox shrink on every side
    pub const PLAYER_HITBOX_INSET: f32 = 5.0;
    pub const OBSTACLE_HITBOX_INSET: f32 = 3.0;

    /// Obstacle sprites
    pub const CACTUS_SMALL_WIDTH: f32 = 17.0;
    pub const CACTUS_SMALL_HEIGHT: f32 = 35.0;
    pub const CACTUS_LARGE_WIDTH: f32 = 25.0;
    pub const CACTUS_LARGE_HEIGHT: f32 = 50.0;
    pub const BIRD_WIDTH: f32 = 46.0;
    pub const BIRD_HEIGHT: f32 = 20.0;
    /// Bird heights above the ground line (sprite top)
    pub const BIRD_HIGH_OFFSET: f32 = 80.0;
    pub const BIRD_LOW_OFFSET: f32 = 40.0;

    /// Distance (pixels of scroll) between obstacle spawns
    pub const OBSTACLE_MIN_DISTANCE: f32 = 300.0;
    pub const OBSTACLE_MAX_DISTANCE: f32 = 600.0;

    /// Scroll speed (pixels per tick)
    pub const INITIAL_SPEED: f32 = 6.0;
    pub const MAX_SPEED: f32 = 15.0;
    pub const SPEED_INCREASE: f32 = 0.5;
    /// Speed goes up each time the floored score reaches a multiple of this
    pub const SPEED_INCREASE_INTERVAL: u64 = 100;

    /// Score added per tick (independent of elapsed time)
    pub const SCORE_PER_TICK: f64 = 0.1;
    /// Score cue plays each time the floored score reaches a multiple of this
    pub const SCORE_CUE_INTERVAL: u64 = 100;

    /// Clouds
    pub const CLOUD_COUNT: usize = 5;
    pub const CLOUD_WIDTH: f32 = 44.0;
    pub const CLOUD_MIN_Y: f32 = 20.0;
    pub const CLOUD_Y_RANGE: f32 = 60.0;
    pub const CLOUD_MIN_SPEED: f32 = 0.5;
    pub const CLOUD_SPEED_RANGE: f32 = 1.0;
    /// Extra random distance past the right edge when a cloud is recycled
    pub const CLOUD_RESPAWN_SPREAD: f32 = 200.0;

    /// Animation frame durations (ms); 0 = never animate
    pub const RUN_FRAME_MS: f32 = 100.0;
    pub const DUCK_FRAME_MS: f32 = 150.0;

    /// Cue volumes
    pub const JUMP_CUE_VOLUME: f32 = 0.3;
    pub const SCORE_CUE_VOLUME: f32 = 0.2;
    pub const HIT_CUE_VOLUME: f32 = 0.5;
}
