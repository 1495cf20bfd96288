//! Folding battle outcomes back into the persistent character.

use crate::character::Character;
use crate::combat::{BattleOutcome, Rewards};
use crate::core::constants::{
    LEVEL_UP_ATTACK, LEVEL_UP_DEFENSE, LEVEL_UP_MAX_HEALTH, LEVEL_UP_MAX_MANA, LEVEL_UP_SPEED,
    XP_PER_CHARACTER_LEVEL,
};
use tracing::info;

/// Experience needed to advance from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u32 {
    level.saturating_mul(XP_PER_CHARACTER_LEVEL)
}

/// What applying an outcome changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressionReport {
    pub rewards: Option<Rewards>,
    /// Every level reached, in order.
    pub levels_gained: Vec<u32>,
    /// True when a defeat sent the character back to town.
    pub recovered: bool,
}

impl ProgressionReport {
    pub fn leveled_up(&self) -> bool {
        !self.levels_gained.is_empty()
    }
}

/// Grants the fixed level-up growth and refills health and mana.
pub fn level_up(character: &mut Character) {
    let stats = &mut character.stats;
    stats.max_health += LEVEL_UP_MAX_HEALTH;
    stats.max_mana += LEVEL_UP_MAX_MANA;
    stats.attack += LEVEL_UP_ATTACK;
    stats.defense += LEVEL_UP_DEFENSE;
    stats.speed += LEVEL_UP_SPEED;
    stats.restore_all();
    character.level += 1;
}

/// Adds experience and levels up as many times as it covers.
/// Returns each level reached.
pub fn apply_experience(character: &mut Character, experience: u32) -> Vec<u32> {
    character.experience = character.experience.saturating_add(experience);

    let mut levels = Vec::new();
    loop {
        let xp_needed = xp_for_next_level(character.level);
        if character.experience < xp_needed {
            break;
        }
        character.experience -= xp_needed;
        level_up(character);
        info!(name = %character.name, level = character.level, "level up");
        levels.push(character.level);
    }
    levels
}

/// Applies a finished battle.
///
/// Victory pays out gold and experience. Defeat costs nothing: health and
/// mana are restored in full and the character returns to town.
pub fn apply_battle_outcome(character: &mut Character, outcome: BattleOutcome) -> ProgressionReport {
    match outcome {
        BattleOutcome::Victory(rewards) => {
            character.gold = character.gold.saturating_add(rewards.gold);
            let levels_gained = apply_experience(character, rewards.experience);
            ProgressionReport {
                rewards: Some(rewards),
                levels_gained,
                recovered: false,
            }
        }
        BattleOutcome::Defeat => {
            character.stats.restore_all();
            ProgressionReport {
                rewards: None,
                levels_gained: Vec::new(),
                recovered: true,
            }
        }
    }
}
