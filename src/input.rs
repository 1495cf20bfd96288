//! UI-agnostic input handling.
//!
//! The terminal front end maps key presses to [`GameInput`]s; this module
//! decides what each one means on the current screen.

use crate::combat::PlayerAction;
use crate::core::game_logic::{
    close_inventory, move_inventory_cursor, open_inventory, player_action, start_battle,
    submit_character, use_selected_item,
};
use crate::core::game_state::{GameState, Phase, Screen};
use crate::core::tick::GameEvent;
use crate::error::GameError;
use crossterm::event::KeyCode;
use rand::Rng;

/// A key press, stripped of terminal details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Character typed
    Char(char),
    Backspace,
    Up,
    Down,
    Left,
    Right,
    /// Enter
    Submit,
    /// Escape
    Cancel,
    /// Any other key
    Other,
}

impl From<KeyCode> for GameInput {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => GameInput::Char(c),
            KeyCode::Backspace => GameInput::Backspace,
            KeyCode::Up => GameInput::Up,
            KeyCode::Down => GameInput::Down,
            KeyCode::Left | KeyCode::BackTab => GameInput::Left,
            KeyCode::Right | KeyCode::Tab => GameInput::Right,
            KeyCode::Enter => GameInput::Submit,
            KeyCode::Esc => GameInput::Cancel,
            _ => GameInput::Other,
        }
    }
}

/// Result of processing one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing worth announcing happened
    Continue,
    /// The input went through and produced these events
    Events(Vec<GameEvent>),
    /// The input was understood but not allowed right now
    Rejected(GameError),
    /// Leave the game
    Quit,
}

impl From<Result<Vec<GameEvent>, GameError>> for InputResult {
    fn from(result: Result<Vec<GameEvent>, GameError>) -> Self {
        match result {
            Ok(events) => InputResult::Events(events),
            Err(err) => InputResult::Rejected(err),
        }
    }
}

impl From<Result<(), GameError>> for InputResult {
    fn from(result: Result<(), GameError>) -> Self {
        match result {
            Ok(()) => InputResult::Continue,
            Err(err) => InputResult::Rejected(err),
        }
    }
}

pub fn battle_action_for(c: char) -> Option<PlayerAction> {
    match c.to_ascii_lowercase() {
        'a' | '1' => Some(PlayerAction::Attack),
        'm' | '2' => Some(PlayerAction::MagicAttack),
        'd' | '3' => Some(PlayerAction::Defend),
        _ => None,
    }
}

pub fn process_input(state: &mut GameState, input: GameInput, rng: &mut impl Rng) -> InputResult {
    match &mut state.phase {
        Phase::Creation(form) => match input {
            GameInput::Char(c) => {
                form.handle_char_input(c);
                InputResult::Continue
            }
            GameInput::Backspace => {
                form.handle_backspace();
                InputResult::Continue
            }
            GameInput::Left => {
                form.prev_class();
                InputResult::Continue
            }
            GameInput::Right => {
                form.next_class();
                InputResult::Continue
            }
            GameInput::Submit => submit_character(state).into(),
            GameInput::Cancel => InputResult::Quit,
            _ => InputResult::Continue,
        },
        Phase::Hub { screen, .. } => match screen {
            Screen::Menu => match input {
                GameInput::Char('b') | GameInput::Char('B') | GameInput::Submit => {
                    start_battle(state, rng).into()
                }
                GameInput::Char('i') | GameInput::Char('I') => open_inventory(state).into(),
                GameInput::Char('q') | GameInput::Char('Q') | GameInput::Cancel => {
                    InputResult::Quit
                }
                _ => InputResult::Continue,
            },
            Screen::Battle(_) => match input {
                GameInput::Char(c) => match battle_action_for(c) {
                    Some(action) => player_action(state, action, rng).into(),
                    None => InputResult::Continue,
                },
                _ => InputResult::Continue,
            },
            Screen::Inventory(_) => match input {
                GameInput::Up => move_inventory_cursor(state, -1).into(),
                GameInput::Down => move_inventory_cursor(state, 1).into(),
                GameInput::Submit | GameInput::Char('u') | GameInput::Char('U') => {
                    use_selected_item(state).into()
                }
                GameInput::Cancel | GameInput::Char('i') | GameInput::Char('I') => {
                    close_inventory(state).into()
                }
                _ => InputResult::Continue,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;
    use crate::core::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn type_name(state: &mut GameState, name: &str, rng: &mut ChaCha8Rng) {
        for c in name.chars() {
            process_input(state, GameInput::Char(c), rng);
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(GameInput::from(KeyCode::Char('x')), GameInput::Char('x'));
        assert_eq!(GameInput::from(KeyCode::Enter), GameInput::Submit);
        assert_eq!(GameInput::from(KeyCode::Esc), GameInput::Cancel);
        assert_eq!(GameInput::from(KeyCode::Tab), GameInput::Right);
        assert_eq!(GameInput::from(KeyCode::F(1)), GameInput::Other);
    }

    #[test]
    fn test_battle_action_keys() {
        assert_eq!(battle_action_for('a'), Some(PlayerAction::Attack));
        assert_eq!(battle_action_for('M'), Some(PlayerAction::MagicAttack));
        assert_eq!(battle_action_for('3'), Some(PlayerAction::Defend));
        assert_eq!(battle_action_for('x'), None);
    }

    #[test]
    fn test_creation_flow_through_input() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        type_name(&mut state, "Robin", &mut rng);
        process_input(&mut state, GameInput::Left, &mut rng);
        let result = process_input(&mut state, GameInput::Submit, &mut rng);

        assert!(matches!(result, InputResult::Events(_)));
        let hero = state.character().unwrap();
        assert_eq!(hero.name, "Robin");
        assert_eq!(hero.class, CharacterClass::Archer);
    }

    #[test]
    fn test_escape_quits_from_creation_and_menu() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            process_input(&mut state, GameInput::Cancel, &mut rng),
            InputResult::Quit
        );

        type_name(&mut state, "Robin", &mut rng);
        process_input(&mut state, GameInput::Submit, &mut rng);
        assert_eq!(
            process_input(&mut state, GameInput::Char('q'), &mut rng),
            InputResult::Quit
        );
    }

    #[test]
    fn test_menu_keys_open_screens() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        type_name(&mut state, "Robin", &mut rng);
        process_input(&mut state, GameInput::Submit, &mut rng);

        process_input(&mut state, GameInput::Char('i'), &mut rng);
        assert!(matches!(state.screen(), Some(Screen::Inventory(_))));
        process_input(&mut state, GameInput::Cancel, &mut rng);
        assert_eq!(state.screen(), Some(&Screen::Menu));

        process_input(&mut state, GameInput::Char('b'), &mut rng);
        assert!(state.is_in_battle());
    }
}
