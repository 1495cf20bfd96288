use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    Misc,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
            ItemKind::Potion => "Potion",
            ItemKind::Misc => "Misc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Flat stat changes an item carries. For potions `health` and `mana` are
/// the amounts restored; gear values are never applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatModifiers {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub health: u32,
    #[serde(default)]
    pub mana: u32,
}

impl StatModifiers {
    pub fn restore(health: u32, mana: u32) -> Self {
        Self {
            health,
            mana,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub rarity: Rarity,
    /// Worth in gold.
    pub value: u32,
    pub description: String,
    #[serde(default)]
    pub stats: Option<StatModifiers>,
    /// Reusable items stay in the inventory after use.
    #[serde(default)]
    pub reusable: bool,
}

impl Item {
    pub fn is_usable(&self) -> bool {
        self.kind == ItemKind::Potion
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 3] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Accessory,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

/// Worn gear. Nothing equips items yet, so every slot starts and stays empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
            EquipmentSlot::Accessory => self.accessory.as_ref(),
        }
    }

    pub fn iter_slots(&self) -> impl Iterator<Item = (EquipmentSlot, Option<&Item>)> + '_ {
        EquipmentSlot::all()
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_rarity_names() {
        assert_eq!(Rarity::Common.name(), "Common");
        assert_eq!(Rarity::Legendary.name(), "Legendary");
    }

    #[test]
    fn test_only_potions_are_usable() {
        let mut item = Item {
            id: "rusty-sword".to_string(),
            name: "Rusty Sword".to_string(),
            kind: ItemKind::Weapon,
            rarity: Rarity::Common,
            value: 5,
            description: "Better than nothing.".to_string(),
            stats: Some(StatModifiers {
                attack: 2,
                ..Default::default()
            }),
            reusable: false,
        };
        assert!(!item.is_usable());

        item.kind = ItemKind::Potion;
        assert!(item.is_usable());
    }

    #[test]
    fn test_empty_equipment() {
        let equipment = Equipment::new();
        assert_eq!(equipment.iter_slots().count(), 3);
        assert!(equipment.iter_slots().all(|(_, item)| item.is_none()));
    }

    #[test]
    fn test_item_missing_optional_fields_deserializes() {
        let json = r#"{
            "id": "pebble",
            "name": "Pebble",
            "kind": "Misc",
            "rarity": "Common",
            "value": 1,
            "description": "A smooth pebble."
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.stats.is_none());
        assert!(!item.reusable);
    }
}
