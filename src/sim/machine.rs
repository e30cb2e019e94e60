//! Phase and pose transitions driven by player actions
//!
//! Actions are applied as soon as they arrive, between ticks. Physics-driven
//! transitions (landing, ducking release, death) happen inside `tick`.

use super::state::{GameEvent, GamePhase, GameState, Pose};
use crate::consts::JUMP_VELOCITY;

/// Discrete player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump key press, click or touch. Starts a run outside of `Playing`.
    Activate,
    /// Duck key went down
    Duck,
}

/// Apply one action to the state machine
pub fn apply_action(state: &mut GameState, action: Action) {
    match (state.phase, action) {
        (GamePhase::Menu | GamePhase::GameOver, Action::Activate) => start_run(state),
        (GamePhase::Menu | GamePhase::GameOver, Action::Duck) => {}
        (GamePhase::Playing, Action::Activate) => jump(state),
        (GamePhase::Playing, Action::Duck) => duck(state),
    }
}

/// Begin a fresh run. Nothing carries over from a previous run except the
/// high score and the clouds.
pub fn start_run(state: &mut GameState) {
    state.reset_run();
    state.phase = GamePhase::Playing;
    log::info!("Run started (best {})", state.high_score);
}

/// Leave the ground if standing. Ignored mid-air and once dead.
pub fn jump(state: &mut GameState) {
    let player = &mut state.player;
    let can_jump = matches!(player.pose, Pose::Running | Pose::Ducking);
    if can_jump && player.is_grounded() {
        player.vel_y = JUMP_VELOCITY;
        player.pose = Pose::Jumping;
        state.events.push(GameEvent::Jump);
    }
}

/// Crouch if running on the ground
pub fn duck(state: &mut GameState) {
    let player = &mut state.player;
    if player.pose == Pose::Running && player.is_grounded() {
        player.pose = Pose::Ducking;
    }
}

/// End the run after a collision
pub fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.player.pose = Pose::Dead;
    state.events.push(GameEvent::Hit);

    let score = state.display_score();
    log::info!("Game over at {}", score);
    if score > state.high_score {
        state.high_score = score;
        state.events.push(GameEvent::NewHighScore(score));
    }
}
