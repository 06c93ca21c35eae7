//! Tiles: four colored corners plus a value.
//!
//! Corners are indexed clockwise starting at the top-left:
//! `0` top-left, `1` top-right, `2` bottom-right, `3` bottom-left.
//! The corner colors are always a permutation of all four colors.

use fastrand::Rng;
use serde::Serialize;

use crate::color::{ALL_COLORS, COLOR_COUNT, Color};
use crate::constants::{CORNERS, MAX_VALUE, MIN_VALUE};
use crate::error::{GameError, Result};
use crate::pool::ValuePool;

/// A cell on the board, as `(row, col)`.
pub type Cell = (usize, usize);

/// A tile, either in a player's hand or placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    corners: [Color; CORNERS],
    value: u8,
    owner: Option<Color>,
    position: Option<Cell>,
}

impl Tile {
    /// Create an unowned, unplaced tile.
    ///
    /// Fails with [`GameError::MalformedTile`] unless `corners` holds every
    /// color exactly once, and with [`GameError::InvalidTileValue`] when the
    /// value is out of range.
    pub fn new(corners: [Color; CORNERS], value: u8) -> Result<Self> {
        let mut seen = [false; COLOR_COUNT];
        for c in corners {
            if std::mem::replace(&mut seen[c.index()], true) {
                return Err(GameError::MalformedTile);
            }
        }
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(GameError::InvalidTileValue(value));
        }
        Ok(Self {
            corners,
            value,
            owner: None,
            position: None,
        })
    }

    /// Create a tile with a random corner permutation.
    pub fn random(value: u8, rng: &mut Rng) -> Result<Self> {
        let mut corners = ALL_COLORS;
        rng.shuffle(&mut corners);
        Self::new(corners, value)
    }

    pub fn corners(&self) -> [Color; CORNERS] {
        self.corners
    }

    /// Color at corner `i` (0..4, clockwise from top-left).
    pub fn corner(&self, i: usize) -> Color {
        self.corners[i % CORNERS]
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn owner(&self) -> Option<Color> {
        self.owner
    }

    pub fn position(&self) -> Option<Cell> {
        self.position
    }

    pub(crate) fn set_owner(&mut self, owner: Color) {
        self.owner = Some(owner);
    }

    pub(crate) fn set_position(&mut self, cell: Cell) {
        self.position = Some(cell);
    }

    /// Quarter turn clockwise: the top-left corner moves to the top-right.
    pub fn rotate_clockwise(&self) -> Tile {
        let [a, b, c, d] = self.corners;
        Tile {
            corners: [d, a, b, c],
            ..*self
        }
    }

    /// Quarter turn counter-clockwise.
    pub fn rotate_counter_clockwise(&self) -> Tile {
        let [a, b, c, d] = self.corners;
        Tile {
            corners: [b, c, d, a],
            ..*self
        }
    }

    /// Apply `turns` clockwise quarter turns.
    pub fn with_rotation(&self, turns: usize) -> Tile {
        (0..turns % CORNERS).fold(*self, |t, _| t.rotate_clockwise())
    }
}

/// Every tile for one game, built once at setup.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Generate one tile per board cell, drawing values from a shuffled pool.
    pub fn generate(board_size: usize, rng: &mut Rng) -> Result<Self> {
        let count = board_size * board_size;
        let mut pool = ValuePool::shuffled(count, rng);
        let mut tiles = Vec::with_capacity(count);
        while let Some(value) = pool.draw() {
            tiles.push(Tile::random(value, rng)?);
        }
        Ok(Self { tiles })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}
