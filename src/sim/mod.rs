//! Simulation module
//!
//! All gameplay logic lives here. This module must stay headless:
//! - Seeded RNG only
//! - No rendering, audio, storage or platform dependencies
//! - Side effects leave as `GameEvent`s for the engine to dispatch

pub mod collision;
pub mod machine;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_hit, obstacle_hitbox, player_hitbox};
pub use machine::{Action, apply_action, start_run};
pub use state::{Cloud, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player, Pose};
pub use tick::{TickInput, spawn_obstacle, tick};
