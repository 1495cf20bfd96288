use crate::combat::{Battle, BattleOutcome};
use crate::core::constants::{BATTLE_LOG_VISIBLE_LINES, MAGIC_MANA_COST};
use crate::core::game_state::BattleSession;
use crate::ui::health_color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draws the battle screen: both combatants, turn banner, actions, and the log
pub fn draw_battle_scene(frame: &mut Frame, area: Rect, session: &BattleSession) {
    let battle = &session.battle;
    let battle_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Battle: {}", battle.enemy.name));

    let inner = battle_block.inner(area);
    frame.render_widget(battle_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player HP bar
            Constraint::Length(3), // Player MP bar
            Constraint::Length(3), // Enemy HP bar
            Constraint::Length(1), // Turn status
            Constraint::Length(3), // Actions
            Constraint::Min(3),    // Log
        ])
        .split(inner);

    draw_player_bars(frame, chunks[0], chunks[1], battle);
    draw_enemy_hp(frame, chunks[2], battle);
    draw_turn_status(frame, chunks[3], session);
    draw_actions(frame, chunks[4], session);
    draw_log(frame, chunks[5], battle);
}

fn draw_player_bars(frame: &mut Frame, hp_area: Rect, mp_area: Rect, battle: &Battle) {
    let stats = &battle.player.stats;
    let hp_ratio = stats.health_ratio();

    let hp = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(battle.player.name.as_str()),
        )
        .gauge_style(
            Style::default()
                .fg(health_color(hp_ratio))
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("HP: {}/{}", stats.health, stats.max_health))
        .ratio(hp_ratio);
    frame.render_widget(hp, hp_area);

    let mp = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Blue))
        .label(format!("MP: {}/{}", stats.mana, stats.max_mana))
        .ratio(stats.mana_ratio());
    frame.render_widget(mp, mp_area);
}

fn draw_enemy_hp(frame: &mut Frame, area: Rect, battle: &Battle) {
    let enemy = &battle.enemy;
    let hp_ratio = enemy.health_ratio();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (Lv. {})", enemy.name, enemy.level)),
        )
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(format!(
            "HP: {}/{}",
            enemy.stats.health, enemy.stats.max_health
        ))
        .ratio(hp_ratio);
    frame.render_widget(gauge, area);
}

fn draw_turn_status(frame: &mut Frame, area: Rect, session: &BattleSession) {
    let battle = &session.battle;
    let (text, color) = match &battle.outcome {
        Some(BattleOutcome::Victory(_)) => ("Victory!".to_string(), Color::Green),
        Some(BattleOutcome::Defeat) => ("Defeat...".to_string(), Color::Red),
        None if battle.is_player_turn() => ("Your turn".to_string(), Color::Cyan),
        None => (format!("{} is thinking...", battle.enemy.name), Color::Yellow),
    };

    let status = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn draw_actions(frame: &mut Frame, area: Rect, session: &BattleSession) {
    let ready = session.accepts_input();
    let can_cast = ready && session.battle.player.stats.mana >= MAGIC_MANA_COST;

    let action = |key: &'static str, label: String, enabled: bool| {
        let style = if enabled {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        vec![
            Span::styled(key, style),
            Span::styled(format!(" {}    ", label), style),
        ]
    };

    let mut spans = action("[A]", "Attack".to_string(), ready);
    spans.extend(action(
        "[M]",
        format!("Magic ({} MP)", MAGIC_MANA_COST),
        can_cast,
    ));
    spans.extend(action("[D]", "Defend".to_string(), ready));

    let actions = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Actions"));
    frame.render_widget(actions, area);
}

fn draw_log(frame: &mut Frame, area: Rect, battle: &Battle) {
    let lines: Vec<Line> = battle
        .recent_log(BATTLE_LOG_VISIBLE_LINES)
        .iter()
        .map(|entry| Line::from(entry.as_str()))
        .collect();

    let log = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Battle Log"));
    frame.render_widget(log, area);
}
