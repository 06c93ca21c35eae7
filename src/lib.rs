//! Carat-Rust: the rules engine of a tile-placement chip game.
//!
//! Square tiles with four colored corners go onto a grid. Each grid-line
//! intersection holds a point chip; every tile touching an intersection adds
//! its value under the color of the touching corner. Once all cells around a
//! chip are filled the chip is awarded to a color, or to nobody on a tie.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, value ranges and setup defaults
//! - [`error`] - Typed validation errors
//! - [`color`] - The four player/corner colors
//! - [`pool`] - Value multisets and the shuffled value pool
//! - [`tile`] - Tiles, rotation and tile-set generation
//! - [`distribution`] - Per-chip accumulated color weights
//! - [`resolver`] - Chip ownership tie-break ladder
//! - [`chip`] - Chips and the chip registry
//! - [`board`] - Grid, placement validation and preview
//! - [`player`] - Players, hands and score ledger
//! - [`ai`] - Random move selection
//! - [`game`] - Turn loop tying it all together
//!
//! ## Example
//!
//! ```
//! use carat_rust::game::{Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! let report = game.place_selected(3, 3).unwrap();
//! assert!(report.outcome.resolved.is_empty());
//!
//! game.play_out().unwrap();
//! println!("{}", game.board());
//! ```

pub mod ai;
pub mod board;
pub mod chip;
pub mod color;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod game;
pub mod player;
pub mod pool;
pub mod resolver;
pub mod tile;

pub use board::{Board, PlacementOutcome};
pub use chip::{Chip, ChipResolution, ChipSnapshot};
pub use color::Color;
pub use error::{GameError, PlacementRejection};
pub use tile::Tile;

/// Create an empty board of `size`x`size` cells with chips shuffled by `rng`.
pub fn create_board(size: usize, rng: &mut fastrand::Rng) -> error::Result<Board> {
    Board::new(size, rng)
}
