//! Main simulation runner.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::{create_character, Character};
use crate::combat::{
    resolve_enemy_turn, resolve_player_action, start_battle, Battle, BattleOutcome, PlayerAction,
    Turn,
};
use crate::core::constants::MAGIC_MANA_COST;
use crate::core::progression::apply_battle_outcome;
use crate::error::BattleError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);
        debug!(
            run = run_idx + 1,
            of = config.num_runs,
            level = run_stats.final_level,
            gold = run_stats.final_gold,
            victories = run_stats.victories,
            defeats = run_stats.defeats,
            "run finished"
        );
        all_runs.push(run_stats);
    }

    SimReport::from_runs(config, all_runs)
}

/// Spend mana on spells while it lasts, then swing.
pub fn choose_action(battle: &Battle) -> PlayerAction {
    if battle.player.stats.mana >= MAGIC_MANA_COST {
        PlayerAction::MagicAttack
    } else {
        PlayerAction::Attack
    }
}

/// Plays one battle to its outcome with [`choose_action`].
pub fn simulate_battle(
    player: &Character,
    rng: &mut impl Rng,
) -> Result<(Battle, BattleOutcome), BattleError> {
    let mut battle = start_battle(player, rng);

    loop {
        let report = match battle.turn {
            Turn::Player => {
                let action = choose_action(&battle);
                resolve_player_action(&mut battle, action, rng)?
            }
            Turn::Enemy => resolve_enemy_turn(&mut battle, rng)?,
        };
        if let Some(outcome) = report.outcome {
            return Ok((battle, outcome));
        }
    }
}

fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut stats = RunStats::default();
    let Ok(mut hero) = create_character("Simulated Hero", config.class) else {
        return stats;
    };

    for _ in 0..config.battles_per_run {
        let Ok((battle, outcome)) = simulate_battle(&hero, rng) else {
            break;
        };

        stats.total_turns += battle.turns_taken as u64;
        let won = matches!(outcome, BattleOutcome::Victory(_));
        stats.record_fight(&battle.enemy.kind, won);

        hero = battle.player;
        let report = apply_battle_outcome(&mut hero, outcome);
        stats.level_ups += report.levels_gained.len() as u32;
    }

    stats.final_level = hero.level;
    stats.final_gold = hero.gold;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;

    #[test]
    fn test_choose_action_prefers_magic() {
        let hero = create_character("Hero", CharacterClass::Mage).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut battle = start_battle(&hero, &mut rng);
        assert_eq!(choose_action(&battle), PlayerAction::MagicAttack);

        battle.player.stats.mana = MAGIC_MANA_COST - 1;
        assert_eq!(choose_action(&battle), PlayerAction::Attack);
    }

    #[test]
    fn test_simulate_battle_reaches_outcome() {
        let hero = create_character("Hero", CharacterClass::Archer).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (battle, outcome) = simulate_battle(&hero, &mut rng).unwrap();

        assert!(!battle.is_active());
        assert_eq!(battle.outcome, Some(outcome));
        match outcome {
            BattleOutcome::Victory(_) => assert_eq!(battle.enemy.stats.health, 0),
            BattleOutcome::Defeat => assert_eq!(battle.player.stats.health, 0),
        }
    }

    #[test]
    fn test_single_run_counts_every_battle() {
        let config = SimConfig::quick(CharacterClass::Warrior, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let stats = simulate_single_run(&config, &mut rng);
        assert_eq!(stats.victories + stats.defeats, config.battles_per_run);
        assert!(stats.final_level >= 1);
        assert!(stats.final_gold >= 100);
    }
}
