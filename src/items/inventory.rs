//! Using items from a character's inventory.

use super::starter::starter_items;
use super::types::Item;
use crate::character::Character;
use crate::error::InventoryError;
use tracing::debug;

/// What a single item use changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUseReport {
    pub item_name: String,
    pub health_restored: u32,
    pub mana_restored: u32,
    /// True when the item left the inventory.
    pub consumed: bool,
}

/// Items the inventory screen lists: the real inventory, or the starter
/// potions when it is empty.
pub fn inventory_view(character: &Character) -> Vec<Item> {
    if character.inventory.is_empty() {
        starter_items()
    } else {
        character.inventory.clone()
    }
}

/// Applies a potion to `character`.
///
/// Restoration is additive and clamped to the maximum. A non-reusable item
/// is removed from the inventory (first entry with a matching id) and must
/// therefore be present in it; reusable items can be used from anywhere.
pub fn use_item(character: &mut Character, item: &Item) -> Result<ItemUseReport, InventoryError> {
    if !item.is_usable() {
        return Err(InventoryError::NotUsable(item.name.clone()));
    }

    let slot = character.inventory.iter().position(|i| i.id == item.id);
    if !item.reusable && slot.is_none() {
        return Err(InventoryError::NotFound(item.id.clone()));
    }

    let modifiers = item.stats.unwrap_or_default();
    let health_restored = character.stats.heal(modifiers.health);
    let mana_restored = character.stats.restore_mana(modifiers.mana);

    let consumed = match slot {
        Some(index) if !item.reusable => {
            character.inventory.remove(index);
            true
        }
        _ => false,
    };

    debug!(
        item = %item.name,
        health_restored,
        mana_restored,
        consumed,
        "item used"
    );

    Ok(ItemUseReport {
        item_name: item.name.clone(),
        health_restored,
        mana_restored,
        consumed,
    })
}
