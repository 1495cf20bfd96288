use crate::character::Character;
use crate::items::inventory_view;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draws gold, equipped gear, and the item list with the cursor on `selected`
pub fn draw_inventory(frame: &mut Frame, area: Rect, character: &Character, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Equipment
            Constraint::Min(3),    // Items
            Constraint::Length(1), // Controls
        ])
        .split(area);

    let equipment_lines: Vec<Line> = character
        .equipment
        .iter_slots()
        .map(|(slot, item)| {
            let (name, style) = match item {
                Some(item) => (item.name.clone(), Style::default().fg(Color::White)),
                None => ("(empty)".to_string(), Style::default().fg(Color::DarkGray)),
            };
            Line::from(vec![
                Span::styled(format!("{:<10}", slot.name()), Style::default().fg(Color::Gray)),
                Span::styled(name, style),
            ])
        })
        .collect();

    let equipment = Paragraph::new(equipment_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Equipment    Gold: {}", character.gold)),
    );
    frame.render_widget(equipment, chunks[0]);

    let items = inventory_view(character);
    let list_items: Vec<ListItem> = if items.is_empty() {
        vec![ListItem::new(Span::styled(
            "Your pack is empty.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        items
            .iter()
            .map(|item| {
                let mut spans = vec![
                    Span::styled(
                        item.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  [{} {}]", item.rarity.name(), item.kind.name()),
                        Style::default().fg(Color::Gray),
                    ),
                ];
                if item.reusable {
                    spans.push(Span::styled("  (reusable)", Style::default().fg(Color::Green)));
                }
                ListItem::new(vec![
                    Line::from(spans),
                    Line::from(Span::styled(
                        format!("    {}", item.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect()
    };

    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL).title("Inventory"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(selected.min(items.len() - 1)));
    }
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    let controls = Paragraph::new("[↑/↓] Select    [Enter] Use    [Esc] Back")
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(controls, chunks[2]);
}
