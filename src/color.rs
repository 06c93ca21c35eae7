//! The closed set of player/corner colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Corner and player colors. Order is fixed and used for seating players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

/// Number of colors in the game.
pub const COLOR_COUNT: usize = 4;

/// All colors in seating order.
pub const ALL_COLORS: [Color; COLOR_COUNT] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

impl Color {
    /// Index of this color in [`ALL_COLORS`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter tag used in text output.
    pub fn initial(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        f.write_str(name)
    }
}
