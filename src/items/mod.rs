//! Item system: types, starter potions, and item use.

pub mod inventory;
pub mod starter;
pub mod types;

pub use inventory::*;
pub use starter::*;
pub use types::*;
