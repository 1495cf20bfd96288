use crate::character::Character;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_menu(frame: &mut Frame, area: Rect, character: &Character) {
    let key = |k: &'static str, label: &'static str| {
        Line::from(vec![
            Span::styled(
                k,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {}", label)),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} rests at camp.", character.name),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        key("[B]", "Seek a battle"),
        key("[I]", "Open inventory"),
        key("[Q]", "Quit"),
    ];

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Camp"));
    frame.render_widget(menu, area);
}
