//! Characters: stats, class presets, and creation.

pub mod classes;
pub mod creation;
pub mod types;

pub use classes::*;
pub use creation::*;
pub use types::*;
