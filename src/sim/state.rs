//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here. Nothing in this module
//! talks to the platform; side effects are reported as `GameEvent`s.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Title screen, waiting for the first activate
    #[default]
    Menu,
    /// Active run
    Playing,
    /// Run ended, waiting for activate to restart
    GameOver,
}

/// Player sub-state, only meaningful while `Playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pose {
    #[default]
    Running,
    Jumping,
    Ducking,
    Dead,
}

impl Pose {
    /// Number of animation frames for this pose
    pub fn frame_count(self) -> u32 {
        match self {
            Pose::Running | Pose::Ducking => 2,
            Pose::Jumping | Pose::Dead => 1,
        }
    }

    /// Time per animation frame in ms (0 = static)
    pub fn frame_ms(self) -> f32 {
        match self {
            Pose::Running => RUN_FRAME_MS,
            Pose::Ducking => DUCK_FRAME_MS,
            Pose::Jumping | Pose::Dead => 0.0,
        }
    }
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Sprite top-left. x never changes.
    pub pos: Vec2,
    /// Vertical velocity in pixels per tick (positive = falling)
    pub vel_y: f32,
    pub pose: Pose,
    pub anim_frame: u32,
    /// Accumulated ms since the last frame advance
    pub anim_timer: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, PLAYER_GROUND_Y),
            vel_y: 0.0,
            pose: Pose::Running,
            anim_frame: 0,
            anim_timer: 0.0,
        }
    }
}

impl Player {
    /// Feet on (or below) the ground line
    pub fn is_grounded(&self) -> bool {
        self.pos.y >= PLAYER_GROUND_Y
    }

    /// Visible sprite height for the current pose
    pub fn height(&self) -> f32 {
        if self.pose == Pose::Ducking {
            PLAYER_DUCK_HEIGHT
        } else {
            PLAYER_HEIGHT
        }
    }

}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    CactusSmall,
    CactusLarge,
    BirdHigh,
    BirdLow,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::CactusSmall,
        ObstacleKind::CactusLarge,
        ObstacleKind::BirdHigh,
        ObstacleKind::BirdLow,
    ];

    /// Sprite size
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::CactusSmall => Vec2::new(CACTUS_SMALL_WIDTH, CACTUS_SMALL_HEIGHT),
            ObstacleKind::CactusLarge => Vec2::new(CACTUS_LARGE_WIDTH, CACTUS_LARGE_HEIGHT),
            ObstacleKind::BirdHigh | ObstacleKind::BirdLow => Vec2::new(BIRD_WIDTH, BIRD_HEIGHT),
        }
    }

    /// Sprite top at spawn
    pub fn spawn_y(self) -> f32 {
        match self {
            ObstacleKind::CactusSmall | ObstacleKind::CactusLarge => GROUND_Y - self.size().y,
            ObstacleKind::BirdHigh => GROUND_Y - BIRD_HIGH_OFFSET,
            ObstacleKind::BirdLow => GROUND_Y - BIRD_LOW_OFFSET,
        }
    }

    pub fn is_bird(self) -> bool {
        matches!(self, ObstacleKind::BirdHigh | ObstacleKind::BirdLow)
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Sprite top-left
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    /// New obstacle with its left edge at `x`
    pub fn new(kind: ObstacleKind, x: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, kind.spawn_y()),
            size: kind.size(),
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Background decoration
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    /// Pixels per tick, fixed for the cloud's lifetime
    pub speed: f32,
}

/// Things the simulation wants the outside world to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left the ground
    Jump,
    /// Floored score reached a multiple of the cue interval
    ScoreMilestone,
    /// Player hit an obstacle
    Hit,
    /// A run ended above the previous best
    NewHighScore(u64),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Accumulated score; floor it for display
    pub score: f64,
    pub high_score: u64,
    /// World scroll speed in pixels per tick
    pub speed: f32,
    /// Ground texture scroll, in `(GROUND_WRAP, 0]`
    pub ground_offset: f32,
    /// Scroll distance left until the next spawn
    pub next_obstacle_distance: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a game sitting on the menu, with a fresh cloud layer
    pub fn new(seed: u64, high_score: u64) -> Self {
        let mut state = Self {
            phase: GamePhase::Menu,
            score: 0.0,
            high_score,
            speed: INITIAL_SPEED,
            ground_offset: 0.0,
            next_obstacle_distance: OBSTACLE_MIN_DISTANCE,
            player: Player::default(),
            obstacles: Vec::new(),
            clouds: Vec::with_capacity(CLOUD_COUNT),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };

        for _ in 0..CLOUD_COUNT {
            let cloud = Cloud {
                pos: Vec2::new(
                    state.rng.random::<f32>() * WORLD_WIDTH,
                    CLOUD_MIN_Y + state.rng.random::<f32>() * CLOUD_Y_RANGE,
                ),
                speed: CLOUD_MIN_SPEED + state.rng.random::<f32>() * CLOUD_SPEED_RANGE,
            };
            state.clouds.push(cloud);
        }

        state
    }

    /// Floored score as shown on the HUD
    pub fn display_score(&self) -> u64 {
        self.score.floor() as u64
    }

    /// Put every per-run value back to its initial state and clear obstacles
    pub fn reset_run(&mut self) {
        self.score = 0.0;
        self.speed = INITIAL_SPEED;
        self.ground_offset = 0.0;
        self.next_obstacle_distance = OBSTACLE_MIN_DISTANCE;
        self.player = Player::default();
        self.obstacles.clear();
    }

    /// Take the pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
