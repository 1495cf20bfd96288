//! Skirmish - Turn-Based Terminal RPG Library
//!
//! Game rules live here: characters, items, the battle engine, progression
//! and the screen controller. The binaries (`skirmish`, `simulate`) are thin
//! shells over this crate.

pub mod character;
pub mod combat;
pub mod core;
pub mod error;
pub mod input;
pub mod items;
pub mod simulator;
pub mod ui;

pub use character::{create_character, Character, CharacterClass, Stats};
pub use combat::{start_battle, Battle, BattleOutcome, Enemy, PlayerAction, Rewards, Turn};
pub use crate::core::config::GameConfig;
pub use crate::core::constants::*;
pub use crate::core::game_state::{GameState, Phase, Screen};
pub use error::{BattleError, CreationError, GameError, InventoryError};
pub use items::{Item, ItemKind, Rarity};
