//! Screen controller, progression, and game-wide settings.

pub mod config;
pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod progression;
pub mod tick;

pub use config::GameConfig;
pub use game_logic::*;
pub use game_state::*;
pub use progression::*;
pub use tick::*;
