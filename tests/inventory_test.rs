//! Integration test: inventory view and item use
//!
//! Exercises the starter potion fallback, consumption of ordinary items,
//! and the inventory screen driven through the controller.

use skirmish::core::game_logic::{
    close_inventory, move_inventory_cursor, open_inventory, use_selected_item,
};
use skirmish::core::tick::GameEvent;
use skirmish::items::{
    health_potion, inventory_view, mana_potion, use_item, ItemUseReport, StatModifiers,
};
use skirmish::{
    create_character, Character, CharacterClass, GameConfig, GameError, GameState, InventoryError,
    Item, ItemKind, Rarity, Screen,
};

fn elixir() -> Item {
    Item {
        id: "elixir".to_string(),
        name: "Elixir".to_string(),
        kind: ItemKind::Potion,
        rarity: Rarity::Rare,
        value: 120,
        description: "Restores 30 health and 30 mana.".to_string(),
        stats: Some(StatModifiers::restore(30, 30)),
        reusable: false,
    }
}

fn wounded_mage() -> Character {
    let mut character = create_character("Ilsa", CharacterClass::Mage).unwrap();
    character.stats.health = 20;
    character.stats.mana = 10;
    character
}

#[test]
fn test_empty_inventory_lists_starter_potions() {
    let character = wounded_mage();
    let view = inventory_view(&character);
    assert_eq!(view, vec![health_potion(), mana_potion()]);
}

#[test]
fn test_starter_potions_never_run_out() {
    let mut character = wounded_mage();

    for _ in 0..3 {
        let report = use_item(&mut character, &mana_potion()).unwrap();
        assert!(!report.consumed);
    }
    assert_eq!(character.stats.mana, 100);
    assert!(character.inventory.is_empty());
    assert_eq!(inventory_view(&character).len(), 2);
}

#[test]
fn test_health_potion_clamps_to_max() {
    let mut character = wounded_mage();
    character.stats.health = 60;

    let report = use_item(&mut character, &health_potion()).unwrap();
    assert_eq!(
        report,
        ItemUseReport {
            item_name: "Health Potion".to_string(),
            health_restored: 20,
            mana_restored: 0,
            consumed: false,
        }
    );
    assert_eq!(character.stats.health, 80);
}

#[test]
fn test_ordinary_potion_is_consumed_once() {
    let mut character = wounded_mage();
    character.inventory = vec![elixir(), elixir()];

    let report = use_item(&mut character, &elixir()).unwrap();
    assert!(report.consumed);
    assert_eq!(character.inventory.len(), 1);
    assert_eq!(character.stats.health, 50);
    assert_eq!(character.stats.mana, 40);

    use_item(&mut character, &elixir()).unwrap();
    // Empty again, so the starter potions come back
    assert_eq!(inventory_view(&character), vec![health_potion(), mana_potion()]);
    assert_eq!(
        use_item(&mut character, &elixir()).unwrap_err(),
        InventoryError::NotFound("elixir".to_string())
    );
}

#[test]
fn test_non_potions_are_not_usable() {
    let mut character = wounded_mage();
    let sword = Item {
        id: "rusty-sword".to_string(),
        name: "Rusty Sword".to_string(),
        kind: ItemKind::Weapon,
        rarity: Rarity::Common,
        value: 5,
        description: "Better than nothing.".to_string(),
        stats: Some(StatModifiers {
            attack: 2,
            ..StatModifiers::default()
        }),
        reusable: false,
    };
    character.inventory.push(sword.clone());
    let before = character.clone();

    assert_eq!(
        use_item(&mut character, &sword).unwrap_err(),
        InventoryError::NotUsable("Rusty Sword".to_string())
    );
    assert_eq!(character, before);
}

#[test]
fn test_inventory_screen_round_trip() {
    let mut state = GameState::with_character(wounded_mage(), GameConfig::default());

    open_inventory(&mut state).unwrap();
    assert!(matches!(state.screen(), Some(Screen::Inventory(_))));
    assert_eq!(open_inventory(&mut state).unwrap_err(), GameError::WrongScreen);

    move_inventory_cursor(&mut state, 5).unwrap();
    let events = use_selected_item(&mut state).unwrap();
    let [GameEvent::ItemUsed(report)] = events.as_slice() else {
        panic!("expected one ItemUsed event, got {:?}", events);
    };
    assert_eq!(report.item_name, "Mana Potion");
    assert_eq!(state.character().unwrap().stats.mana, 50);

    close_inventory(&mut state).unwrap();
    assert_eq!(state.screen(), Some(&Screen::Menu));
    assert_eq!(
        close_inventory(&mut state).unwrap_err(),
        GameError::Inventory(InventoryError::InventoryClosed)
    );
}
