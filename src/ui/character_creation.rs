use crate::character::{CharacterClass, ClassTemplate};
use crate::core::game_state::CreationForm;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_character_creation(
    f: &mut Frame,
    area: Rect,
    form: &CreationForm,
    status: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Input label + field
            Constraint::Length(2),  // Validation
            Constraint::Length(11), // Class cards
            Constraint::Min(0),     // Filler
            Constraint::Length(3),  // Controls
        ])
        .split(area);

    // Title
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Create Your Hero",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Choose your class and begin your adventure",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    // Input field with cursor
    let input_text = {
        let chars: Vec<char> = form.name_input.chars().collect();
        let cursor = form.cursor_position.min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let after: String = chars[cursor..].iter().collect();
        format!("{}_{}", before, after)
    };
    let input_widget = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Hero Name"))
        .style(Style::default().fg(Color::White));
    f.render_widget(input_widget, chunks[1]);

    // Validation feedback
    let validation_text = if let Some(error) = &form.validation_error {
        Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(message) = status {
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ))
    } else if form.is_valid() {
        Line::from(Span::styled(
            "✓ Name is valid",
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(validation_text), chunks[2]);

    draw_class_cards(f, chunks[3], form.selected_class);

    // Controls
    let controls = Paragraph::new("[←/→] Class    [Enter] Begin Adventure    [Esc] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(controls, chunks[5]);
}

fn draw_class_cards(f: &mut Frame, area: Rect, selected: CharacterClass) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (class, column) in CharacterClass::all().into_iter().zip(columns.iter()) {
        draw_class_card(f, *column, class.template(), class == selected);
    }
}

fn draw_class_card(f: &mut Frame, area: Rect, template: &ClassTemplate, is_selected: bool) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let stat = |label: &str, value: u32, color: Color| {
        Line::from(vec![
            Span::raw(format!("{:<9}", label)),
            Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            template.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        stat("Health:", template.max_health, Color::Red),
        stat("Mana:", template.max_mana, Color::Blue),
        stat("Attack:", template.attack, Color::Yellow),
        stat("Defense:", template.defense, Color::White),
        stat("Speed:", template.speed, Color::Green),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(template.name),
        )
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(card, area);
}
