//! The fixed table of enemy archetypes.

use super::types::{Enemy, EnemyStats};
use rand::Rng;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub kind: &'static str,
    pub name: &'static str,
    pub level: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub gold: u32,
}

impl EnemyTemplate {
    /// Builds a fresh enemy at full health with its own identity.
    pub fn spawn(&self) -> Enemy {
        Enemy {
            id: Uuid::new_v4(),
            kind: self.kind.to_string(),
            name: self.name.to_string(),
            level: self.level,
            stats: EnemyStats {
                health: self.max_health,
                max_health: self.max_health,
                attack: self.attack,
                defense: self.defense,
                speed: self.speed,
            },
            gold: self.gold,
            loot: Vec::new(),
        }
    }
}

pub const ENEMY_TEMPLATES: [EnemyTemplate; 3] = [
    EnemyTemplate {
        kind: "goblin",
        name: "Goblin Warrior",
        level: 1,
        max_health: 40,
        attack: 8,
        defense: 3,
        speed: 6,
        gold: 15,
    },
    EnemyTemplate {
        kind: "orc",
        name: "Orc Berserker",
        level: 2,
        max_health: 60,
        attack: 12,
        defense: 5,
        speed: 4,
        gold: 25,
    },
    EnemyTemplate {
        kind: "skeleton",
        name: "Skeleton Mage",
        level: 2,
        max_health: 35,
        attack: 15,
        defense: 2,
        speed: 8,
        gold: 30,
    },
];

pub fn find_template(kind: &str) -> Option<&'static EnemyTemplate> {
    ENEMY_TEMPLATES.iter().find(|t| t.kind == kind)
}

/// Picks an archetype uniformly at random and spawns it.
pub fn random_enemy(rng: &mut impl Rng) -> Enemy {
    ENEMY_TEMPLATES[rng.gen_range(0..ENEMY_TEMPLATES.len())].spawn()
}
