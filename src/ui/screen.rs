//! Terminal screen rendering
//!
//! Draws the calculator: a bordered display panel with the two
//! right-aligned display lines on top, the keypad face below. The
//! layout split is exposed separately so the event loop can hit-test
//! mouse clicks against exactly the rectangles that were drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::domain::Command;
use crate::ui::display::DisplayFrame;
use crate::ui::keypad::Keypad;

/// Height of the display panel: two text lines plus borders
const DISPLAY_HEIGHT: u16 = 4;
/// The calculator column is clamped to a pocket-sized width
const MAX_WIDTH: u16 = 44;

/// Screen regions shared between drawing and hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub display: Rect,
    pub keypad: Rect,
}

/// Splits the terminal area into display and keypad regions
///
/// The calculator column is centered horizontally and capped at a
/// readable width.
pub fn split(area: Rect) -> ScreenLayout {
    let width = area.width.min(MAX_WIDTH);
    let x = area.x + (area.width - width) / 2;
    let column = Rect::new(x, area.y, width, area.height);

    let regions = Layout::vertical([
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Min(0),
    ])
    .split(column);

    ScreenLayout {
        display: regions[0],
        keypad: regions[1],
    }
}

/// Draws one full frame
pub fn draw(frame: &mut Frame, display: &DisplayFrame, keypad: &Keypad, layout: &ScreenLayout) {
    draw_display(frame, display, layout.display);
    draw_keypad(frame, keypad);
}

fn draw_display(frame: &mut Frame, display: &DisplayFrame, area: Rect) {
    let lines = vec![
        Line::styled(
            display.previous.clone(),
            Style::new().fg(Color::DarkGray),
        ),
        Line::styled(
            display.current.clone(),
            Style::new().add_modifier(Modifier::BOLD),
        ),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::bordered().title("tallypad"));
    frame.render_widget(panel, area);
}

fn draw_keypad(frame: &mut Frame, keypad: &Keypad) {
    for button in keypad.buttons() {
        let style = button_style(button.command);
        let inner_height = button.area.height.saturating_sub(2);

        // Center the label vertically inside the bordered cell
        let mut lines = vec![Line::raw(""); (inner_height.saturating_sub(1) / 2) as usize];
        lines.push(Line::styled(button.label, style));

        let cell = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(cell, button.area);
    }
}

fn button_style(command: Command) -> Style {
    match command {
        Command::AppendDigit(_) => Style::new(),
        Command::ChooseOperation(_) | Command::Evaluate => Style::new().fg(Color::Yellow),
        Command::DeleteLast | Command::ClearAll => Style::new().fg(Color::Red),
    }
}
