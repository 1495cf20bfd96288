//! Simulation report generation.

use super::config::SimConfig;
use crate::character::CharacterClass;
use crate::combat::ENEMY_TEMPLATES;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fights and wins against one enemy archetype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FightTally {
    pub fights: u32,
    pub victories: u32,
}

/// Statistics from a single simulated hero.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub victories: u32,
    pub defeats: u32,
    pub level_ups: u32,
    pub final_level: u32,
    pub final_gold: u32,
    pub total_turns: u64,
    /// Keyed by enemy template kind.
    pub fights_by_enemy: BTreeMap<String, FightTally>,
}

impl RunStats {
    pub fn record_fight(&mut self, enemy_kind: &str, won: bool) {
        let tally = self
            .fights_by_enemy
            .entry(enemy_kind.to_string())
            .or_default();
        tally.fights += 1;
        if won {
            tally.victories += 1;
            self.victories += 1;
        } else {
            self.defeats += 1;
        }
    }

    pub fn battles(&self) -> u32 {
        self.victories + self.defeats
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyBreakdown {
    pub kind: String,
    pub name: String,
    pub fights: u32,
    pub victories: u32,
    pub win_rate: f64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub class: CharacterClass,
    pub num_runs: u32,
    pub battles_per_run: u32,
    pub total_battles: u32,
    pub victories: u32,
    pub defeats: u32,
    pub win_rate: f64,
    pub avg_final_level: f64,
    pub max_final_level: u32,
    pub avg_level_ups: f64,
    pub avg_final_gold: f64,
    pub avg_turns_per_battle: f64,
    pub enemies: Vec<EnemyBreakdown>,
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let victories: u32 = runs.iter().map(|r| r.victories).sum();
        let defeats: u32 = runs.iter().map(|r| r.defeats).sum();
        let total_battles = victories + defeats;
        let total_turns: u64 = runs.iter().map(|r| r.total_turns).sum();

        let avg_final_level = ratio(
            runs.iter().map(|r| r.final_level as f64).sum(),
            num_runs as f64,
        );
        let avg_final_gold = ratio(
            runs.iter().map(|r| r.final_gold as f64).sum(),
            num_runs as f64,
        );
        let max_final_level = runs.iter().map(|r| r.final_level).max().unwrap_or(0);
        let avg_level_ups = ratio(
            runs.iter().map(|r| r.level_ups as f64).sum(),
            num_runs as f64,
        );

        let mut totals: BTreeMap<&str, FightTally> = BTreeMap::new();
        for run in &runs {
            for (kind, tally) in &run.fights_by_enemy {
                let total = totals.entry(kind.as_str()).or_default();
                total.fights += tally.fights;
                total.victories += tally.victories;
            }
        }

        // Table order, so reports line up across runs.
        let enemies = ENEMY_TEMPLATES
            .iter()
            .map(|template| {
                let tally = totals.get(template.kind).copied().unwrap_or_default();
                EnemyBreakdown {
                    kind: template.kind.to_string(),
                    name: template.name.to_string(),
                    fights: tally.fights,
                    victories: tally.victories,
                    win_rate: ratio(tally.victories as f64, tally.fights as f64),
                }
            })
            .collect();

        Self {
            class: config.class,
            num_runs,
            battles_per_run: config.battles_per_run,
            total_battles,
            victories,
            defeats,
            win_rate: ratio(victories as f64, total_battles as f64),
            avg_final_level,
            max_final_level,
            avg_level_ups,
            avg_final_gold,
            avg_turns_per_battle: ratio(total_turns as f64, total_battles as f64),
            enemies,
            run_stats: runs,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("═══════════════════════════════════════════════════════\n");
        out.push_str(&format!(
            "  {}: {} runs x {} battles\n",
            self.class.name(),
            self.num_runs,
            self.battles_per_run
        ));
        out.push_str("═══════════════════════════════════════════════════════\n\n");

        out.push_str("OUTCOMES\n");
        out.push_str(&format!("  Battles:         {}\n", self.total_battles));
        out.push_str(&format!(
            "  Victories:       {} ({:.1}%)\n",
            self.victories,
            self.win_rate * 100.0
        ));
        out.push_str(&format!("  Defeats:         {}\n", self.defeats));
        out.push_str(&format!(
            "  Turns / battle:  {:.1}\n\n",
            self.avg_turns_per_battle
        ));

        out.push_str("PROGRESSION\n");
        out.push_str(&format!("  Avg final level: {:.2}\n", self.avg_final_level));
        out.push_str(&format!("  Max final level: {}\n", self.max_final_level));
        out.push_str(&format!("  Avg level-ups:   {:.2}\n", self.avg_level_ups));
        out.push_str(&format!("  Avg final gold:  {:.1}\n\n", self.avg_final_gold));

        out.push_str("BY ENEMY\n");
        for enemy in &self.enemies {
            out.push_str(&format!(
                "  {:<16} {:>6} fights  {:>5.1}% won\n",
                enemy.name,
                enemy.fights,
                enemy.win_rate * 100.0
            ));
        }

        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
