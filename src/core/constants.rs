// Damage
/// Upper bound (exclusive) of the per-hit variance roll.
pub const DAMAGE_ROLL_MAX: u32 = 5;
pub const MIN_DAMAGE: u32 = 1;
pub const MAGIC_MANA_COST: u32 = 10;
/// Magic damage is the rolled attack damage times 3/2, floored.
pub const MAGIC_DAMAGE_NUMERATOR: u32 = 3;
pub const MAGIC_DAMAGE_DENOMINATOR: u32 = 2;

// Rewards and leveling
pub const XP_PER_ENEMY_LEVEL: u32 = 25;
pub const XP_PER_CHARACTER_LEVEL: u32 = 100;
pub const LEVEL_UP_MAX_HEALTH: u32 = 10;
pub const LEVEL_UP_MAX_MANA: u32 = 5;
pub const LEVEL_UP_ATTACK: u32 = 2;
pub const LEVEL_UP_DEFENSE: u32 = 1;
pub const LEVEL_UP_SPEED: u32 = 1;

// Character creation
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_LEVEL: u32 = 1;
pub const MAX_NAME_LENGTH: usize = 16;

// Timing (seconds)
pub const ENEMY_THINK_DELAY_SECONDS: f64 = 1.5;
pub const ACTION_COOLDOWN_SECONDS: f64 = 0.5;
pub const OUTCOME_DELAY_SECONDS: f64 = 1.0;
pub const INPUT_POLL_MS: u64 = 50;

// Battle log
pub const BATTLE_LOG_VISIBLE_LINES: usize = 8;
