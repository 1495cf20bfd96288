//! Base stat templates for the three character classes.

use super::types::{CharacterClass, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassTemplate {
    pub class: CharacterClass,
    pub name: &'static str,
    pub description: &'static str,
    pub max_health: u32,
    pub max_mana: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl ClassTemplate {
    /// A fresh stats record at full health and mana.
    pub fn base_stats(&self) -> Stats {
        Stats {
            health: self.max_health,
            max_health: self.max_health,
            mana: self.max_mana,
            max_mana: self.max_mana,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
        }
    }
}

pub const CLASS_TEMPLATES: [ClassTemplate; 3] = [
    ClassTemplate {
        class: CharacterClass::Warrior,
        name: "Warrior",
        description: "A strong melee fighter with high defense and health.",
        max_health: 120,
        max_mana: 30,
        attack: 15,
        defense: 12,
        speed: 8,
    },
    ClassTemplate {
        class: CharacterClass::Mage,
        name: "Mage",
        description: "A powerful spellcaster with high mana and magical abilities.",
        max_health: 80,
        max_mana: 100,
        attack: 18,
        defense: 6,
        speed: 10,
    },
    ClassTemplate {
        class: CharacterClass::Archer,
        name: "Archer",
        description: "A swift ranged fighter with balanced stats and high speed.",
        max_health: 100,
        max_mana: 60,
        attack: 14,
        defense: 9,
        speed: 14,
    },
];

impl CharacterClass {
    pub fn template(&self) -> &'static ClassTemplate {
        &CLASS_TEMPLATES[self.index()]
    }

    pub fn name(&self) -> &'static str {
        self.template().name
    }

    /// Parses a class name, ignoring case.
    pub fn from_name(name: &str) -> Option<CharacterClass> {
        CharacterClass::all()
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_indexed_by_class() {
        for class in CharacterClass::all() {
            assert_eq!(class.template().class, class);
        }
    }

    #[test]
    fn test_warrior_template() {
        let stats = CharacterClass::Warrior.template().base_stats();
        assert_eq!(stats.health, 120);
        assert_eq!(stats.max_health, 120);
        assert_eq!(stats.mana, 30);
        assert_eq!(stats.attack, 15);
        assert_eq!(stats.defense, 12);
        assert_eq!(stats.speed, 8);
    }

    #[test]
    fn test_mage_has_most_mana() {
        let mage = CharacterClass::Mage.template();
        assert!(CLASS_TEMPLATES.iter().all(|t| t.max_mana <= mage.max_mana));
    }

    #[test]
    fn test_archer_is_fastest() {
        let archer = CharacterClass::Archer.template();
        assert!(CLASS_TEMPLATES.iter().all(|t| t.speed <= archer.speed));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CharacterClass::from_name("mage"), Some(CharacterClass::Mage));
        assert_eq!(CharacterClass::from_name(" ARCHER "), Some(CharacterClass::Archer));
        assert_eq!(CharacterClass::from_name("bard"), None);
    }
}
