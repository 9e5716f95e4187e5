//! On-screen keypad layout and hit-testing
//!
//! The keypad mirrors the keyboard bindings as clickable buttons. The
//! layout is computed from the area the screen gives it, so hit-testing
//! and rendering share the same rectangles.

use ratatui::layout::{Position, Rect};

use crate::domain::{Command, Operation};

/// Number of button columns
pub const COLS: u16 = 4;
/// Number of button rows
pub const ROWS: u16 = 5;

/// One cell entry in the static layout: label, column span, command
type Cell = (&'static str, u16, Command);

/// The keypad face, top row first. "C" and "0" span two columns.
const LAYOUT: [&[Cell]; ROWS as usize] = [
    &[
        ("C", 2, Command::ClearAll),
        ("⌫", 1, Command::DeleteLast),
        ("÷", 1, Command::ChooseOperation(Operation::Divide)),
    ],
    &[
        ("7", 1, Command::AppendDigit('7')),
        ("8", 1, Command::AppendDigit('8')),
        ("9", 1, Command::AppendDigit('9')),
        ("×", 1, Command::ChooseOperation(Operation::Multiply)),
    ],
    &[
        ("4", 1, Command::AppendDigit('4')),
        ("5", 1, Command::AppendDigit('5')),
        ("6", 1, Command::AppendDigit('6')),
        ("−", 1, Command::ChooseOperation(Operation::Subtract)),
    ],
    &[
        ("1", 1, Command::AppendDigit('1')),
        ("2", 1, Command::AppendDigit('2')),
        ("3", 1, Command::AppendDigit('3')),
        ("+", 1, Command::ChooseOperation(Operation::Add)),
    ],
    &[
        ("0", 2, Command::AppendDigit('0')),
        (".", 1, Command::AppendDigit('.')),
        ("=", 1, Command::Evaluate),
    ],
];

/// A positioned keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub command: Command,
    pub area: Rect,
}

/// The keypad with every button laid out inside a screen area
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keypad {
    buttons: Vec<Button>,
}

impl Keypad {
    /// Lays out the keypad inside the given area
    ///
    /// Cell sizes come from even division; the rightmost column and the
    /// bottom row absorb the remainder so the face fills the area. An
    /// area too small for one cell per button yields an empty keypad.
    pub fn layout(area: Rect) -> Self {
        let cell_width = area.width / COLS;
        let cell_height = area.height / ROWS;
        if cell_width == 0 || cell_height == 0 {
            return Self::default();
        }

        let mut buttons = Vec::new();
        for (row, cells) in LAYOUT.iter().enumerate() {
            let row = row as u16;
            let y = area.y + row * cell_height;
            let height = if row + 1 == ROWS {
                area.height - row * cell_height
            } else {
                cell_height
            };

            let mut col = 0u16;
            for &(label, span, command) in cells.iter() {
                let x = area.x + col * cell_width;
                let width = if col + span == COLS {
                    area.width - col * cell_width
                } else {
                    span * cell_width
                };

                buttons.push(Button {
                    label,
                    command,
                    area: Rect::new(x, y, width, height),
                });
                col += span;
            }
        }

        Self { buttons }
    }

    /// Returns the laid-out buttons
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Finds the command under a screen position
    ///
    /// # Arguments
    /// * `column` - Terminal column of the pointer
    /// * `row` - Terminal row of the pointer
    ///
    /// # Returns
    /// Some(command) if the position falls on a button, None otherwise
    pub fn hit(&self, column: u16, row: u16) -> Option<Command> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|button| button.area.contains(position))
            .map(|button| button.command)
    }
}
