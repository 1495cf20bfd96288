//! Rejections for illegal actions.
//!
//! Every fallible operation leaves the state it was given untouched when it
//! returns one of these.

use thiserror::Error;

/// A battle action that cannot be taken right now.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("it is not the enemy's turn")]
    NotEnemyTurn,

    #[error("the battle is already over")]
    BattleOver,

    #[error("not enough mana: need {required}, have {available}")]
    InsufficientMana { required: u32, available: u32 },

    /// The previous action is still resolving.
    #[error("an action is still being resolved")]
    Busy,

    #[error("there is no battle in progress")]
    NoActiveBattle,
}

/// Character creation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must be {max} characters or less")]
    NameTooLong { max: usize },

    #[error("Name can only contain letters, numbers, spaces, hyphens, and underscores")]
    InvalidCharacters,
}

/// An item could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("{0} cannot be used")]
    NotUsable(String),

    #[error("no item with id {0}")]
    NotFound(String),

    #[error("the inventory is not open")]
    InventoryClosed,
}

/// Any rejection surfaced by the screen controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("no character has been created yet")]
    NoCharacter,

    #[error("that is not possible from this screen")]
    WrongScreen,
}
