use crate::character::types::ratio;
use crate::character::Character;
use crate::core::constants::XP_PER_ENEMY_LEVEL;
use crate::items::Item;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: Uuid,
    /// Template this enemy was cloned from.
    pub kind: String,
    pub name: String,
    pub level: u32,
    pub stats: EnemyStats,
    /// Gold awarded on defeat.
    pub gold: u32,
    /// Never populated; loot drops are not implemented.
    #[serde(default)]
    pub loot: Vec<Item>,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.stats.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.stats.health = self.stats.health.saturating_sub(amount);
    }

    pub fn health_ratio(&self) -> f64 {
        ratio(self.stats.health, self.stats.max_health)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    Attack,
    MagicAttack,
    /// Passes the turn. Does not reduce incoming damage.
    Defend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rewards {
    pub gold: u32,
    pub experience: u32,
}

impl Rewards {
    pub fn for_enemy(enemy: &Enemy) -> Self {
        Self {
            gold: enemy.gold,
            experience: enemy.level * XP_PER_ENEMY_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory(Rewards),
    Defeat,
}

/// One resolved action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleEvent {
    PlayerAttack { damage: u32 },
    PlayerSpell { damage: u32, mana_spent: u32 },
    PlayerDefend,
    EnemyAttack { damage: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReport {
    pub event: BattleEvent,
    /// Set when this action ended the battle.
    pub outcome: Option<BattleOutcome>,
}

/// A single encounter.
///
/// `player` is a snapshot of the persistent character taken when the battle
/// started; the caller folds it and the outcome back in afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
    pub player: Character,
    pub enemy: Enemy,
    pub turn: Turn,
    /// `None` while the battle is active.
    pub outcome: Option<BattleOutcome>,
    pub log: Vec<String>,
    /// Actions resolved so far, by either side.
    pub turns_taken: u32,
}

impl Battle {
    /// Sets up an encounter. The faster side opens; ties go to the player.
    pub fn new(player: Character, enemy: Enemy) -> Self {
        let turn = if player.stats.speed >= enemy.stats.speed {
            Turn::Player
        } else {
            Turn::Enemy
        };
        let log = vec![format!("A wild {} appears!", enemy.name)];

        Self {
            player,
            enemy,
            turn,
            outcome: None,
            log,
            turns_taken: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn is_player_turn(&self) -> bool {
        self.is_active() && self.turn == Turn::Player
    }

    pub fn is_enemy_turn(&self) -> bool {
        self.is_active() && self.turn == Turn::Enemy
    }

    pub fn add_log_entry(&mut self, message: String) {
        self.log.push(message);
    }

    /// The last `count` log lines, oldest first.
    pub fn recent_log(&self, count: usize) -> &[String] {
        let start = self.log.len().saturating_sub(count);
        &self.log[start..]
    }
}
