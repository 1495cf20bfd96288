//! Terminal rendering. Reads the game state, never mutates it.

pub mod battle_scene;
pub mod character_creation;
pub mod inventory_scene;
pub mod menu_scene;
pub mod stats_panel;

use crate::core::game_state::{GameState, Phase, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function. `status` is the latest notification, if any.
pub fn draw_ui(frame: &mut Frame, game_state: &GameState, status: Option<&str>) {
    let size = frame.size();

    let (character, screen) = match &game_state.phase {
        Phase::Creation(form) => {
            character_creation::draw_character_creation(frame, size, form, status);
            return;
        }
        Phase::Hub { character, screen } => (character, screen),
    };

    // Split vertically: main content, status line
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content (stats + right panel)
            Constraint::Length(3), // Status line
        ])
        .split(size);

    // Split main content: character sheet (left) and current screen (right)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Stats panel
            Constraint::Percentage(70), // Menu, battle, or inventory
        ])
        .split(v_chunks[0]);

    stats_panel::draw_stats_panel(frame, chunks[0], character);

    match screen {
        Screen::Menu => menu_scene::draw_menu(frame, chunks[1], character),
        Screen::Battle(session) => battle_scene::draw_battle_scene(frame, chunks[1], session),
        Screen::Inventory(cursor) => {
            inventory_scene::draw_inventory(frame, chunks[1], character, cursor.selected)
        }
    }

    draw_status_line(frame, v_chunks[1], status);
}

/// Draws the latest notification at the bottom of the screen
fn draw_status_line(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let line = match status {
        Some(message) => Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Health bar color by remaining fraction.
pub(crate) fn health_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}
