//! Property tests for the battle rules.
//!
//! Random stats and seeds; each property must hold for every input.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish::combat::{
    calculate_damage, magic_damage, resolve_enemy_turn, resolve_player_action, ENEMY_TEMPLATES,
};
use skirmish::core::progression::{apply_battle_outcome, xp_for_next_level};
use skirmish::{
    create_character, Battle, BattleError, BattleOutcome, CharacterClass, PlayerAction, Rewards,
    Turn, DAMAGE_ROLL_MAX, MAGIC_MANA_COST,
};

fn class_strategy() -> impl Strategy<Value = CharacterClass> {
    prop_oneof![
        Just(CharacterClass::Warrior),
        Just(CharacterClass::Mage),
        Just(CharacterClass::Archer),
    ]
}

fn action_strategy() -> impl Strategy<Value = PlayerAction> {
    prop_oneof![
        Just(PlayerAction::Attack),
        Just(PlayerAction::MagicAttack),
        Just(PlayerAction::Defend),
    ]
}

proptest! {
    #[test]
    fn damage_is_at_least_one(attack in 0u32..500, defense in 0u32..1000, roll in 0..DAMAGE_ROLL_MAX) {
        let damage = calculate_damage(attack, defense, roll);
        prop_assert!(damage >= 1);
        prop_assert!(damage <= attack + roll || damage == 1);
    }

    #[test]
    fn magic_beats_the_weakest_hit(attack in 0u32..500, defense in 0u32..1000, roll in 0..DAMAGE_ROLL_MAX) {
        let weakest = calculate_damage(attack, defense, 0);
        let spell = magic_damage(calculate_damage(attack, defense, roll));
        prop_assert!(spell >= weakest * 3 / 2);
    }

    #[test]
    fn battles_alternate_and_end_cleanly(
        class in class_strategy(),
        enemy_index in 0usize..3,
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..200)
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hero = create_character("Prop", class).unwrap();
        let enemy = ENEMY_TEMPLATES[enemy_index].spawn();
        let mut battle = Battle::new(hero, enemy);

        for action in actions {
            if !battle.is_active() {
                break;
            }
            let turn_before = battle.turn;
            let mana_before = battle.player.stats.mana;
            let result = match turn_before {
                Turn::Player => resolve_player_action(&mut battle, action, &mut rng),
                Turn::Enemy => resolve_enemy_turn(&mut battle, &mut rng),
            };

            match result {
                Ok(report) => {
                    if report.outcome.is_none() {
                        prop_assert_ne!(battle.turn, turn_before);
                    }
                }
                Err(err) => {
                    // Only a spell without mana may be refused mid-battle
                    prop_assert_eq!(action, PlayerAction::MagicAttack);
                    prop_assert!(mana_before < MAGIC_MANA_COST);
                    prop_assert_eq!(err, BattleError::InsufficientMana {
                        required: MAGIC_MANA_COST,
                        available: mana_before,
                    });
                    prop_assert_eq!(battle.player.stats.mana, mana_before);
                    prop_assert_eq!(battle.turn, turn_before);
                }
            }

            prop_assert!(battle.player.stats.health <= battle.player.stats.max_health);
            prop_assert!(battle.enemy.stats.health <= battle.enemy.stats.max_health);
        }

        match battle.outcome {
            Some(BattleOutcome::Victory(_)) => prop_assert_eq!(battle.enemy.stats.health, 0),
            Some(BattleOutcome::Defeat) => prop_assert_eq!(battle.player.stats.health, 0),
            None => {
                prop_assert!(battle.player.stats.health > 0);
                prop_assert!(battle.enemy.stats.health > 0);
            }
        }
    }

    #[test]
    fn level_up_happens_exactly_at_threshold(
        class in class_strategy(),
        start_xp in 0u32..100,
        reward in 0u32..100
    ) {
        let mut hero = create_character("Prop", class).unwrap();
        hero.experience = start_xp;
        let report = apply_battle_outcome(
            &mut hero,
            BattleOutcome::Victory(Rewards { gold: 0, experience: reward }),
        );

        let should_level = start_xp + reward >= xp_for_next_level(1);
        prop_assert_eq!(report.leveled_up(), should_level);
        prop_assert_eq!(hero.level, if should_level { 2 } else { 1 });
        prop_assert!(hero.experience < xp_for_next_level(hero.level));
    }

    #[test]
    fn defeat_restores_but_keeps_gold(
        class in class_strategy(),
        gold in any::<u32>(),
        health in 0u32..50,
        mana in 0u32..30
    ) {
        let mut hero = create_character("Prop", class).unwrap();
        hero.gold = gold;
        hero.stats.health = health;
        hero.stats.mana = mana;

        apply_battle_outcome(&mut hero, BattleOutcome::Defeat);

        prop_assert_eq!(hero.gold, gold);
        prop_assert_eq!(hero.stats.health, hero.stats.max_health);
        prop_assert_eq!(hero.stats.mana, hero.stats.max_mana);
    }
}
