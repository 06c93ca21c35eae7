//! The tile grid and its chips.
//!
//! Placement rules:
//! - the opening tile must go strictly inside the outer ring;
//! - every later tile must share an edge with a placed tile.
//!
//! A successful placement feeds the tile's four corners into the chips at the
//! cell's corners and resolves any chip that becomes fully surrounded.
//! A rejected placement changes nothing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use fastrand::Rng;
use serde::Serialize;
use tracing::{instrument, trace};

use crate::chip::{Chip, ChipRegistry, ChipResolution, Intersection};
use crate::color::Color;
use crate::constants::{CORNER_OFFSETS, CORNERS, MAX_BOARD_SIZE, MIN_BOARD_SIZE, ORTHOGONAL};
use crate::error::{GameError, PlacementRejection, Result};
use crate::tile::{Cell, Tile};

/// What a committed placement did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementOutcome {
    pub cell: Cell,
    pub tile: Tile,
    /// Chips that resolved because of this placement, in corner order.
    pub resolved: Vec<ChipResolution>,
}

/// Projected percentage view per touched chip, keyed by intersection.
pub type Preview = BTreeMap<Intersection, BTreeMap<Color, f64>>;

#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Tile>>,
    chips: ChipRegistry,
    placed: usize,
}

impl Board {
    /// Create an empty board with freshly shuffled chips.
    pub fn new(size: usize, rng: &mut Rng) -> Result<Self> {
        check_size(size)?;
        Ok(Self::with_chips(ChipRegistry::new(size, rng)?))
    }

    /// Create an empty board around an existing chip layout.
    pub fn with_chips(chips: ChipRegistry) -> Self {
        let size = chips.size();
        Self {
            size,
            cells: vec![None; size * size],
            chips,
            placed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of tiles placed so far.
    pub fn placed_count(&self) -> usize {
        self.placed
    }

    pub fn is_full(&self) -> bool {
        self.placed == self.cells.len()
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn in_range(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if !self.in_range(row, col) {
            return None;
        }
        self.cells[self.idx(row, col)].as_ref()
    }

    pub fn chip(&self, row: usize, col: usize) -> Option<&Chip> {
        self.chips.get(row, col)
    }

    pub fn chips(&self) -> &ChipRegistry {
        &self.chips
    }

    fn on_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.size - 1 || col == self.size - 1
    }

    fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Cell> + '_ {
        ORTHOGONAL.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.in_range(r, c).then_some((r, c))
        })
    }

    /// Explain why `(row, col)` cannot take a tile, or `Ok(())` if it can.
    pub fn check_placement(&self, row: usize, col: usize) -> Result<()> {
        if !self.in_range(row, col) {
            return Err(GameError::InvalidPosition {
                row,
                col,
                size: self.size,
            });
        }
        let reject = |reason| GameError::IllegalPlacement { row, col, reason };
        if self.get(row, col).is_some() {
            return Err(reject(PlacementRejection::Occupied));
        }
        if self.placed == 0 {
            if self.on_border(row, col) {
                return Err(reject(PlacementRejection::OpeningOnBorder));
            }
            return Ok(());
        }
        if self.neighbors(row, col).any(|(r, c)| self.get(r, c).is_some()) {
            Ok(())
        } else {
            Err(reject(PlacementRejection::NotAdjacent))
        }
    }

    pub fn can_place(&self, row: usize, col: usize) -> bool {
        self.check_placement(row, col).is_ok()
    }

    /// Every cell that currently accepts a tile.
    pub fn valid_positions(&self) -> BTreeSet<Cell> {
        (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .filter(|&(r, c)| self.can_place(r, c))
            .collect()
    }

    /// Intersections under each tile corner for cell `(row, col)`, in corner order.
    fn corner_chips(row: usize, col: usize) -> [Intersection; CORNERS] {
        CORNER_OFFSETS.map(|(dr, dc)| (row + dr, col + dc))
    }

    /// Commit `tile` at `(row, col)`.
    ///
    /// Stamps the tile's position, adds its corners to the four surrounding
    /// chips and resolves those that became fully surrounded.
    #[instrument(skip(self, tile), fields(value = tile.value()))]
    pub fn place(&mut self, mut tile: Tile, row: usize, col: usize) -> Result<PlacementOutcome> {
        self.check_placement(row, col)?;

        tile.set_position((row, col));
        let idx = self.idx(row, col);
        self.cells[idx] = Some(tile);
        self.placed += 1;

        let mut resolved = Vec::new();
        for (corner, (r, c)) in Self::corner_chips(row, col).into_iter().enumerate() {
            // Corner intersections of an in-range cell are always in range.
            if let Some(chip) = self.chips.get_mut(r, c) {
                chip.accumulate(tile.corner(corner), tile.value());
                if let Some(res) = chip.try_resolve() {
                    resolved.push(res);
                }
            }
        }

        Ok(PlacementOutcome {
            cell: (row, col),
            tile,
            resolved,
        })
    }

    /// Percentage views the four touched chips would show if `tile` went to
    /// `(row, col)`. Nothing on the board changes.
    ///
    /// The cell must be in range and empty; adjacency is not checked so the
    /// caller can look ahead anywhere.
    pub fn preview(&self, tile: &Tile, row: usize, col: usize) -> Result<Preview> {
        match self.check_placement(row, col) {
            Ok(()) => {}
            Err(GameError::IllegalPlacement {
                reason: PlacementRejection::OpeningOnBorder | PlacementRejection::NotAdjacent,
                ..
            }) => {}
            Err(e) => return Err(e),
        }
        trace!(row, col, value = tile.value(), "preview");
        let mut out = Preview::new();
        for (corner, (r, c)) in Self::corner_chips(row, col).into_iter().enumerate() {
            if let Some(chip) = self.chips.get(r, c) {
                let projected = chip
                    .distribution()
                    .with_contribution(tile.corner(corner), tile.value());
                out.insert((r, c), projected.percentages());
            }
        }
        Ok(out)
    }
}

pub(crate) fn check_size(size: usize) -> Result<()> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(GameError::InvalidBoardSize(size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.get(row, col) {
                    Some(t) => t.owner().map_or('#', Color::initial),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
