//! Player-initiated transitions of the screen controller.
//!
//! Each operation either applies fully and returns the events it produced,
//! or is rejected with a [`GameError`] and leaves the state untouched.

use crate::character::{create_character, validate_name};
use crate::combat::{resolve_player_action, start_battle as begin_battle, PlayerAction};
use crate::core::game_state::{BattleSession, GameState, InventoryCursor, Phase, Screen};
use crate::core::tick::GameEvent;
use crate::error::{BattleError, GameError, InventoryError};
use crate::items::{inventory_view, use_item};
use rand::Rng;
use tracing::debug;

/// Creates the character from the creation form and opens the menu.
pub fn submit_character(state: &mut GameState) -> Result<Vec<GameEvent>, GameError> {
    let Phase::Creation(form) = &mut state.phase else {
        return Err(GameError::WrongScreen);
    };

    let character = match validate_name(&form.name_input)
        .and_then(|()| create_character(&form.name(), form.selected_class))
    {
        Ok(character) => character,
        Err(err) => {
            form.validation_error = Some(err.clone());
            return Err(err.into());
        }
    };

    let event = GameEvent::CharacterCreated {
        name: character.name.clone(),
        class: character.class,
    };
    debug!(name = %character.name, class = ?character.class, "character created");
    state.phase = Phase::Hub {
        character,
        screen: Screen::Menu,
    };
    Ok(vec![event])
}

/// Leaves the menu for a battle against a random enemy.
pub fn start_battle(state: &mut GameState, rng: &mut impl Rng) -> Result<Vec<GameEvent>, GameError> {
    let Phase::Hub { character, screen } = &mut state.phase else {
        return Err(GameError::NoCharacter);
    };
    if *screen != Screen::Menu {
        return Err(GameError::WrongScreen);
    }

    let battle = begin_battle(character, rng);
    let event = GameEvent::BattleStarted {
        enemy: battle.enemy.name.clone(),
    };
    *screen = Screen::Battle(BattleSession::new(battle));
    Ok(vec![event])
}

/// Submits the player's action for the current turn.
///
/// Rejected with [`BattleError::Busy`] while the previous action still holds
/// the processing lock.
pub fn player_action(
    state: &mut GameState,
    action: PlayerAction,
    rng: &mut impl Rng,
) -> Result<Vec<GameEvent>, GameError> {
    let cooldown = state.config.action_cooldown;
    let Phase::Hub { screen, .. } = &mut state.phase else {
        return Err(GameError::NoCharacter);
    };
    let Screen::Battle(session) = screen else {
        return Err(BattleError::NoActiveBattle.into());
    };
    if session.is_busy() {
        debug!(?action, "action rejected while busy");
        return Err(BattleError::Busy.into());
    }

    let report = resolve_player_action(&mut session.battle, action, rng).inspect_err(|err| {
        debug!(?action, %err, "action rejected");
    })?;
    session.busy_remaining = cooldown;
    Ok(vec![GameEvent::Battle(report.event)])
}

pub fn open_inventory(state: &mut GameState) -> Result<(), GameError> {
    let Phase::Hub { screen, .. } = &mut state.phase else {
        return Err(GameError::NoCharacter);
    };
    if *screen != Screen::Menu {
        return Err(GameError::WrongScreen);
    }
    *screen = Screen::Inventory(InventoryCursor::default());
    Ok(())
}

pub fn close_inventory(state: &mut GameState) -> Result<(), GameError> {
    let Phase::Hub { screen, .. } = &mut state.phase else {
        return Err(GameError::NoCharacter);
    };
    if !matches!(screen, Screen::Inventory(_)) {
        return Err(InventoryError::InventoryClosed.into());
    }
    *screen = Screen::Menu;
    Ok(())
}

/// Moves the inventory selection by `offset`, clamped to the listed items.
pub fn move_inventory_cursor(state: &mut GameState, offset: i32) -> Result<(), GameError> {
    let Phase::Hub { character, screen } = &mut state.phase else {
        return Err(GameError::NoCharacter);
    };
    let Screen::Inventory(cursor) = screen else {
        return Err(InventoryError::InventoryClosed.into());
    };

    let last = inventory_view(character).len().saturating_sub(1) as i64;
    cursor.selected = (cursor.selected as i64 + offset as i64).clamp(0, last) as usize;
    Ok(())
}

/// Uses the item under the inventory cursor.
pub fn use_selected_item(state: &mut GameState) -> Result<Vec<GameEvent>, GameError> {
    let Phase::Hub { character, screen } = &mut state.phase else {
        return Err(GameError::NoCharacter);
    };
    let Screen::Inventory(cursor) = screen else {
        return Err(InventoryError::InventoryClosed.into());
    };

    let view = inventory_view(character);
    let Some(item) = view.get(cursor.selected) else {
        return Err(InventoryError::NotFound(format!("#{}", cursor.selected)).into());
    };

    let report = use_item(character, item)?;
    let remaining = inventory_view(character).len();
    cursor.selected = cursor.selected.min(remaining.saturating_sub(1));
    Ok(vec![GameEvent::ItemUsed(report)])
}
