//! Battle engine: enemies, damage, and turn resolution.

pub mod enemies;
pub mod logic;
pub mod types;

pub use enemies::*;
pub use logic::*;
pub use types::*;
