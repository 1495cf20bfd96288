use crate::items::{Equipment, Item};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Archer,
}

impl CharacterClass {
    pub fn all() -> [CharacterClass; 3] {
        [
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Archer,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            CharacterClass::Warrior => 0,
            CharacterClass::Mage => 1,
            CharacterClass::Archer => 2,
        }
    }

    /// Cycles forward through the classes, wrapping around.
    pub fn next(&self) -> CharacterClass {
        Self::all()[(self.index() + 1) % 3]
    }

    /// Cycles backward through the classes, wrapping around.
    pub fn prev(&self) -> CharacterClass {
        Self::all()[(self.index() + 2) % 3]
    }
}

/// Combat stats of a character.
///
/// `health <= max_health` and `mana <= max_mana` hold after every mutation
/// made through the methods below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl Stats {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restores up to `amount` health. Returns how much was actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health.saturating_sub(before)
    }

    /// Restores up to `amount` mana. Returns how much was actually restored.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let before = self.mana;
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
        self.mana.saturating_sub(before)
    }

    /// Spends `cost` mana if there is enough of it.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana < cost {
            return false;
        }
        self.mana -= cost;
        true
    }

    pub fn restore_all(&mut self) {
        self.health = self.max_health;
        self.mana = self.max_mana;
    }

    pub fn health_ratio(&self) -> f64 {
        ratio(self.health, self.max_health)
    }

    pub fn mana_ratio(&self) -> f64 {
        ratio(self.mana, self.max_mana)
    }
}

pub(crate) fn ratio(current: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        (current as f64 / max as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    /// Experience toward the next level; reset on level-up.
    pub experience: u32,
    pub stats: Stats,
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    pub gold: u32,
}
