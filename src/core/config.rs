//! Timing configuration for the screen controller.

use super::constants::{
    ACTION_COOLDOWN_SECONDS, ENEMY_THINK_DELAY_SECONDS, OUTCOME_DELAY_SECONDS,
};

/// Delays that pace a battle in real time.
///
/// The battle rules never read these; only [`crate::core::tick`] and the
/// processing lock in [`crate::core::game_logic`] do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// How long the enemy "thinks" before acting on its turn.
    pub enemy_think_delay: f64,
    /// How long the processing lock is held after any resolved action.
    pub action_cooldown: f64,
    /// Pause between a battle turning terminal and the outcome being applied.
    pub outcome_delay: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_think_delay: ENEMY_THINK_DELAY_SECONDS,
            action_cooldown: ACTION_COOLDOWN_SECONDS,
            outcome_delay: OUTCOME_DELAY_SECONDS,
        }
    }
}

impl GameConfig {
    /// Every timer fires on the next tick.
    pub fn instant() -> Self {
        Self {
            enemy_think_delay: 0.0,
            action_cooldown: 0.0,
            outcome_delay: 0.0,
        }
    }
}
