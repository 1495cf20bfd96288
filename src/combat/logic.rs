use super::enemies::random_enemy;
use super::types::{ActionReport, Battle, BattleEvent, BattleOutcome, PlayerAction, Rewards, Turn};
use crate::character::Character;
use crate::core::constants::{
    DAMAGE_ROLL_MAX, MAGIC_DAMAGE_DENOMINATOR, MAGIC_DAMAGE_NUMERATOR, MAGIC_MANA_COST,
    MIN_DAMAGE,
};
use crate::error::BattleError;
use rand::Rng;
use tracing::{debug, info};

/// Damage of a single hit: `attack - floor(defense / 2) + roll`, at least 1.
pub fn calculate_damage(attack: u32, defense: u32, roll: u32) -> u32 {
    attack
        .saturating_add(roll)
        .saturating_sub(defense / 2)
        .max(MIN_DAMAGE)
}

/// Spell damage: one and a half times a rolled hit, floored and capped at
/// `u32::MAX`.
pub fn magic_damage(base_damage: u32) -> u32 {
    let scaled =
        base_damage as u64 * MAGIC_DAMAGE_NUMERATOR as u64 / MAGIC_DAMAGE_DENOMINATOR as u64;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Uniform over `0..DAMAGE_ROLL_MAX`.
pub fn roll_variance(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..DAMAGE_ROLL_MAX)
}

pub fn roll_damage(attack: u32, defense: u32, rng: &mut impl Rng) -> u32 {
    calculate_damage(attack, defense, roll_variance(rng))
}

/// Starts a battle against a random enemy archetype.
pub fn start_battle(player: &Character, rng: &mut impl Rng) -> Battle {
    let battle = Battle::new(player.clone(), random_enemy(rng));
    debug!(
        enemy = %battle.enemy.name,
        first_turn = ?battle.turn,
        "battle started"
    );
    battle
}

/// Resolves the player's chosen action.
///
/// Rejected without any state change when the battle is over, when it is
/// the enemy's turn, or when a spell is cast without enough mana.
pub fn resolve_player_action(
    battle: &mut Battle,
    action: PlayerAction,
    rng: &mut impl Rng,
) -> Result<ActionReport, BattleError> {
    if !battle.is_active() {
        return Err(BattleError::BattleOver);
    }
    if battle.turn != Turn::Player {
        return Err(BattleError::NotPlayerTurn);
    }

    let event = match action {
        PlayerAction::Attack => {
            let damage = roll_damage(
                battle.player.stats.attack,
                battle.enemy.stats.defense,
                rng,
            );
            battle.enemy.take_damage(damage);
            let message = format!(
                "{} attacks {} for {} damage!",
                battle.player.name, battle.enemy.name, damage
            );
            battle.add_log_entry(message);
            BattleEvent::PlayerAttack { damage }
        }
        PlayerAction::MagicAttack => {
            let available = battle.player.stats.mana;
            if !battle.player.stats.spend_mana(MAGIC_MANA_COST) {
                return Err(BattleError::InsufficientMana {
                    required: MAGIC_MANA_COST,
                    available,
                });
            }
            let damage = magic_damage(roll_damage(
                battle.player.stats.attack,
                battle.enemy.stats.defense,
                rng,
            ));
            battle.enemy.take_damage(damage);
            let message = format!(
                "{} casts a magic spell for {} damage!",
                battle.player.name, damage
            );
            battle.add_log_entry(message);
            BattleEvent::PlayerSpell {
                damage,
                mana_spent: MAGIC_MANA_COST,
            }
        }
        PlayerAction::Defend => {
            let message = format!("{} takes a defensive stance!", battle.player.name);
            battle.add_log_entry(message);
            BattleEvent::PlayerDefend
        }
    };

    battle.turns_taken += 1;
    debug!(?event, enemy_health = battle.enemy.stats.health, "player acted");

    let outcome = if battle.enemy.is_alive() {
        battle.turn = Turn::Enemy;
        None
    } else {
        let rewards = Rewards::for_enemy(&battle.enemy);
        info!(
            enemy = %battle.enemy.name,
            gold = rewards.gold,
            experience = rewards.experience,
            "victory"
        );
        battle.outcome = Some(BattleOutcome::Victory(rewards));
        battle.outcome
    };

    Ok(ActionReport { event, outcome })
}

/// Resolves the enemy's automatic attack.
pub fn resolve_enemy_turn(
    battle: &mut Battle,
    rng: &mut impl Rng,
) -> Result<ActionReport, BattleError> {
    if !battle.is_active() {
        return Err(BattleError::BattleOver);
    }
    if battle.turn != Turn::Enemy {
        return Err(BattleError::NotEnemyTurn);
    }

    let damage = roll_damage(battle.enemy.stats.attack, battle.player.stats.defense, rng);
    battle.player.stats.take_damage(damage);
    let message = format!(
        "{} attacks {} for {} damage!",
        battle.enemy.name, battle.player.name, damage
    );
    battle.add_log_entry(message);
    battle.turns_taken += 1;
    debug!(damage, player_health = battle.player.stats.health, "enemy acted");

    let outcome = if battle.player.stats.is_alive() {
        battle.turn = Turn::Player;
        None
    } else {
        info!(enemy = %battle.enemy.name, "defeat");
        battle.outcome = Some(BattleOutcome::Defeat);
        battle.outcome
    };

    Ok(ActionReport {
        event: BattleEvent::EnemyAttack { damage },
        outcome,
    })
}
