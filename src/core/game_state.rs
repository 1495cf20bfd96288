//! Which screen is showing and the data each one carries.

use crate::character::{validate_name, Character, CharacterClass};
use crate::combat::Battle;
use crate::core::config::GameConfig;
use crate::error::CreationError;

/// Name entry and class selection before a character exists.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationForm {
    pub name_input: String,
    /// Cursor position in characters, not bytes.
    pub cursor_position: usize,
    pub selected_class: CharacterClass,
    pub validation_error: Option<CreationError>,
}

impl Default for CreationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationForm {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            cursor_position: 0,
            selected_class: CharacterClass::Warrior,
            validation_error: None,
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        let byte_index = self.byte_index();
        self.name_input.insert(byte_index, c);
        self.cursor_position += 1;
        self.validate();
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_index = self.byte_index();
            self.name_input.remove(byte_index);
            self.validate();
        }
    }

    pub fn next_class(&mut self) {
        self.selected_class = self.selected_class.next();
    }

    pub fn prev_class(&mut self) {
        self.selected_class = self.selected_class.prev();
    }

    pub fn validate(&mut self) {
        self.validation_error = validate_name(&self.name_input).err();
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error.is_none() && !self.name_input.trim().is_empty()
    }

    pub fn name(&self) -> String {
        self.name_input.trim().to_string()
    }

    fn byte_index(&self) -> usize {
        self.name_input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.name_input.len(), |(i, _)| i)
    }
}

/// A battle in progress, plus the timers that pace it.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSession {
    pub battle: Battle,
    /// Seconds left on the processing lock. Player input is rejected and
    /// the enemy waits while this is above zero.
    pub busy_remaining: f64,
    /// Seconds the enemy has spent deciding on its current turn.
    pub enemy_think_timer: f64,
    /// Seconds since the battle reached an outcome.
    pub outcome_timer: f64,
}

impl BattleSession {
    pub fn new(battle: Battle) -> Self {
        Self {
            battle,
            busy_remaining: 0.0,
            enemy_think_timer: 0.0,
            outcome_timer: 0.0,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy_remaining > 0.0
    }

    /// True when the player may submit an action right now.
    pub fn accepts_input(&self) -> bool {
        !self.is_busy() && self.battle.is_player_turn()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryCursor {
    pub selected: usize,
}

/// Screens reachable once a character exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu,
    Battle(BattleSession),
    Inventory(InventoryCursor),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Creation(CreationForm),
    Hub { character: Character, screen: Screen },
}

/// The whole session. Owned by the front end and mutated only through
/// [`crate::core::game_logic`] and [`crate::core::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: Phase::Creation(CreationForm::new()),
            config,
        }
    }

    /// Skips creation and starts at the menu with `character`.
    pub fn with_character(character: Character, config: GameConfig) -> Self {
        Self {
            phase: Phase::Hub {
                character,
                screen: Screen::Menu,
            },
            config,
        }
    }

    pub fn character(&self) -> Option<&Character> {
        match &self.phase {
            Phase::Hub { character, .. } => Some(character),
            Phase::Creation(_) => None,
        }
    }

    pub fn screen(&self) -> Option<&Screen> {
        match &self.phase {
            Phase::Hub { screen, .. } => Some(screen),
            Phase::Creation(_) => None,
        }
    }

    pub fn battle_session(&self) -> Option<&BattleSession> {
        match self.screen() {
            Some(Screen::Battle(session)) => Some(session),
            _ => None,
        }
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle_session().map(|session| &session.battle)
    }

    pub fn is_in_battle(&self) -> bool {
        self.battle_session().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::create_character;

    #[test]
    fn test_new_state_starts_in_creation() {
        let state = GameState::new(GameConfig::default());
        assert!(matches!(state.phase, Phase::Creation(_)));
        assert!(state.character().is_none());
        assert!(state.screen().is_none());
    }

    #[test]
    fn test_with_character_starts_at_menu() {
        let hero = create_character("Hero", CharacterClass::Archer).unwrap();
        let state = GameState::with_character(hero.clone(), GameConfig::default());
        assert_eq!(state.character(), Some(&hero));
        assert_eq!(state.screen(), Some(&Screen::Menu));
        assert!(!state.is_in_battle());
    }

    #[test]
    fn test_form_typing_and_backspace() {
        let mut form = CreationForm::new();
        for c in "Bob".chars() {
            form.handle_char_input(c);
        }
        assert_eq!(form.name_input, "Bob");
        assert_eq!(form.cursor_position, 3);
        assert!(form.is_valid());

        form.handle_backspace();
        assert_eq!(form.name_input, "Bo");
        assert_eq!(form.cursor_position, 2);
    }

    #[test]
    fn test_form_handles_multibyte_names() {
        let mut form = CreationForm::new();
        for c in "Zoë".chars() {
            form.handle_char_input(c);
        }
        form.handle_backspace();
        assert_eq!(form.name_input, "Zo");
        form.handle_char_input('é');
        assert_eq!(form.name_input, "Zoé");
    }

    #[test]
    fn test_form_reports_validation_error() {
        let mut form = CreationForm::new();
        form.handle_char_input('!');
        assert_eq!(form.validation_error, Some(CreationError::InvalidCharacters));
        assert!(!form.is_valid());

        form.handle_backspace();
        assert_eq!(form.validation_error, Some(CreationError::EmptyName));
    }

    #[test]
    fn test_backspace_on_empty_form_is_noop() {
        let mut form = CreationForm::new();
        form.handle_backspace();
        assert_eq!(form, CreationForm::new());
    }

    #[test]
    fn test_form_class_cycling() {
        let mut form = CreationForm::new();
        form.next_class();
        assert_eq!(form.selected_class, CharacterClass::Mage);
        form.prev_class();
        form.prev_class();
        assert_eq!(form.selected_class, CharacterClass::Archer);
    }
}
