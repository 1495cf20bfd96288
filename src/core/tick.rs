//! Timer-driven half of the screen controller.
//!
//! `tick()` advances the processing lock, lets the enemy act once it has
//! finished "thinking", and applies a finished battle's outcome after the
//! announcement delay. It returns [`GameEvent`]s so the front end can show
//! notifications without the rules depending on any UI types.

use crate::character::CharacterClass;
use crate::combat::{resolve_enemy_turn, BattleEvent, BattleOutcome, Rewards};
use crate::core::game_state::{GameState, Phase, Screen};
use crate::core::progression::apply_battle_outcome;
use crate::items::ItemUseReport;
use rand::Rng;

/// Something the player should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CharacterCreated {
        name: String,
        class: CharacterClass,
    },
    BattleStarted {
        enemy: String,
    },
    /// An action was resolved by either side.
    Battle(BattleEvent),
    Victory {
        rewards: Rewards,
    },
    LevelUp {
        name: String,
        level: u32,
    },
    Defeat,
    ItemUsed(ItemUseReport),
}

impl GameEvent {
    /// Notification text, for events worth announcing.
    pub fn notification(&self) -> Option<String> {
        match self {
            GameEvent::CharacterCreated { name, .. } => {
                Some(format!("Welcome, {}! Your adventure begins now.", name))
            }
            GameEvent::BattleStarted { enemy } => Some(format!("{} blocks your path!", enemy)),
            GameEvent::Battle(_) => None,
            GameEvent::Victory { rewards } => Some(format!(
                "Victory! Gained {} gold and {} experience!",
                rewards.gold, rewards.experience
            )),
            GameEvent::LevelUp { name, level } => {
                Some(format!("Level up! {} is now level {}!", name, level))
            }
            GameEvent::Defeat => Some("Defeat! You have fallen in battle.".to_string()),
            GameEvent::ItemUsed(report) => Some(format!(
                "Used {} (+{} HP, +{} MP)",
                report.item_name, report.health_restored, report.mana_restored
            )),
        }
    }
}

/// Advances every timer by `delta_time` seconds.
pub fn tick(state: &mut GameState, delta_time: f64, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let config = state.config;

    let Phase::Hub { character, screen } = &mut state.phase else {
        return events;
    };
    let Screen::Battle(session) = &mut *screen else {
        return events;
    };

    let already_finished = !session.battle.is_active();
    // The enemy only starts thinking on the tick after the lock is released.
    let was_busy = session.is_busy();
    session.busy_remaining = (session.busy_remaining - delta_time).max(0.0);

    if session.battle.is_enemy_turn() && !was_busy {
        session.enemy_think_timer += delta_time;
        if session.enemy_think_timer >= config.enemy_think_delay {
            session.enemy_think_timer = 0.0;
            // Guarded by is_enemy_turn() above.
            if let Ok(report) = resolve_enemy_turn(&mut session.battle, rng) {
                session.busy_remaining = config.action_cooldown;
                events.push(GameEvent::Battle(report.event));
                if report.outcome.is_none() {
                    // Battle damage shows on the character sheet mid-fight.
                    *character = session.battle.player.clone();
                }
            }
        }
    }

    if !already_finished {
        return events;
    }

    session.outcome_timer += delta_time;
    if session.outcome_timer < config.outcome_delay {
        return events;
    }

    let Some(outcome) = session.battle.outcome else {
        return events;
    };
    *character = session.battle.player.clone();
    *screen = Screen::Menu;

    let report = apply_battle_outcome(character, outcome);
    match outcome {
        BattleOutcome::Victory(rewards) => {
            events.push(GameEvent::Victory { rewards });
            for level in report.levels_gained {
                events.push(GameEvent::LevelUp {
                    name: character.name.clone(),
                    level,
                });
            }
        }
        BattleOutcome::Defeat => events.push(GameEvent::Defeat),
    }

    events
}
