//! The pair of potions every new hero can fall back on.

use super::types::{Item, ItemKind, Rarity, StatModifiers};

pub const HEALTH_POTION_ID: &str = "health-potion";
pub const MANA_POTION_ID: &str = "mana-potion";

pub fn health_potion() -> Item {
    Item {
        id: HEALTH_POTION_ID.to_string(),
        name: "Health Potion".to_string(),
        kind: ItemKind::Potion,
        rarity: Rarity::Common,
        value: 25,
        description: "Restores 50 health points.".to_string(),
        stats: Some(StatModifiers::restore(50, 0)),
        reusable: true,
    }
}

pub fn mana_potion() -> Item {
    Item {
        id: MANA_POTION_ID.to_string(),
        name: "Mana Potion".to_string(),
        kind: ItemKind::Potion,
        rarity: Rarity::Common,
        value: 30,
        description: "Restores 40 mana points.".to_string(),
        stats: Some(StatModifiers::restore(0, 40)),
        reusable: true,
    }
}

/// Shown in place of an empty inventory.
pub fn starter_items() -> Vec<Item> {
    vec![health_potion(), mana_potion()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_items_are_reusable_potions() {
        let items = starter_items();
        assert_eq!(items.len(), 2);
        for item in &items {
            assert_eq!(item.kind, ItemKind::Potion);
            assert!(item.reusable);
        }
    }

    #[test]
    fn test_starter_potion_amounts() {
        let hp = health_potion().stats.unwrap();
        assert_eq!(hp.health, 50);
        assert_eq!(hp.mana, 0);

        let mp = mana_potion().stats.unwrap();
        assert_eq!(mp.health, 0);
        assert_eq!(mp.mana, 40);
    }
}
