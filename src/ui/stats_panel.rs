use crate::character::Character;
use crate::core::progression::xp_for_next_level;
use crate::ui::health_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the character sheet on the left side of the hub
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, character: &Character) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // HP
            Constraint::Length(3), // MP
            Constraint::Length(3), // XP
            Constraint::Min(7),    // Attributes
        ])
        .split(area);

    draw_header(frame, chunks[0], character);

    let stats = &character.stats;
    let hp = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("HP"))
        .gauge_style(Style::default().fg(health_color(stats.health_ratio())))
        .label(format!("{}/{}", stats.health, stats.max_health))
        .ratio(stats.health_ratio());
    frame.render_widget(hp, chunks[1]);

    let mp = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("MP"))
        .gauge_style(Style::default().fg(Color::Blue))
        .label(format!("{}/{}", stats.mana, stats.max_mana))
        .ratio(stats.mana_ratio());
    frame.render_widget(mp, chunks[2]);

    let needed = xp_for_next_level(character.level);
    let xp_ratio = if needed == 0 {
        0.0
    } else {
        (character.experience as f64 / needed as f64).clamp(0.0, 1.0)
    };
    let xp = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("XP"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .label(format!("{}/{}", character.experience, needed))
        .ratio(xp_ratio);
    frame.render_widget(xp, chunks[3]);

    draw_attributes(frame, chunks[4], character);
}

fn draw_header(frame: &mut Frame, area: Rect, character: &Character) {
    let text = vec![
        Line::from(vec![Span::styled(
            character.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::raw(format!("Level {} ", character.level)),
            Span::styled(character.class.name(), Style::default().fg(Color::Yellow)),
        ]),
    ];

    let header = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Character"),
    );
    frame.render_widget(header, area);
}

fn draw_attributes(frame: &mut Frame, area: Rect, character: &Character) {
    let row = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<9}", label), Style::default().fg(Color::Gray)),
            Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let stats = &character.stats;
    let lines = vec![
        row("Attack", stats.attack.to_string(), Color::Yellow),
        row("Defense", stats.defense.to_string(), Color::White),
        row("Speed", stats.speed.to_string(), Color::Green),
        Line::from(""),
        row("Gold", character.gold.to_string(), Color::LightYellow),
    ];

    let attributes =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(attributes, area);
}
