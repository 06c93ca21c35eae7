//! Point chips on the grid-line intersections.
//!
//! A board of `size`x`size` cells has `(size+1)`x`(size+1)` intersections,
//! each holding one chip. A chip resolves once every cell that can touch it
//! holds a tile: 1 cell for the four board corners, 2 along the border,
//! 4 in the interior.

use std::collections::BTreeMap;

use fastrand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::color::Color;
use crate::constants::{MAX_VALUE, MIN_VALUE};
use crate::distribution::Distribution;
use crate::error::{GameError, Result};
use crate::pool::value_multiset;
use crate::resolver::resolve;

/// An intersection, as `(row, col)` with both in `0..=size`.
pub type Intersection = (usize, usize);

/// Number of board cells touching intersection `(row, col)` on a `size` board.
///
/// Out-of-range intersections touch no cells and yield 0.
pub fn required_adjacency(size: usize, row: usize, col: usize) -> usize {
    let rows = usize::from(row > 0 && row <= size) + usize::from(row < size);
    let cols = usize::from(col > 0 && col <= size) + usize::from(col < size);
    rows * cols
}

/// A chip that just resolved, to be credited by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipResolution {
    pub position: Intersection,
    /// Winning color, or `None` when nobody scores.
    pub owner: Option<Color>,
    pub points: u8,
}

/// Read-only view of a chip's state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipSnapshot {
    pub position: Intersection,
    pub value: u8,
    pub required_adjacency: usize,
    pub placed_adjacent: usize,
    pub distribution: Distribution,
    pub percentage_view: BTreeMap<Color, f64>,
    pub collected: bool,
    pub collected_by: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    position: Intersection,
    value: u8,
    required: usize,
    placed_adjacent: usize,
    distribution: Distribution,
    collected: bool,
    collected_by: Option<Color>,
}

impl Chip {
    /// Create an unresolved chip at `position` on a `board_size` board.
    pub fn new(value: u8, position: Intersection, board_size: usize) -> Result<Self> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(GameError::InvalidChipValue(value));
        }
        Ok(Self {
            position,
            value,
            required: required_adjacency(board_size, position.0, position.1),
            placed_adjacent: 0,
            distribution: Distribution::new(),
            collected: false,
            collected_by: None,
        })
    }

    pub fn position(&self) -> Intersection {
        self.position
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn required_adjacency(&self) -> usize {
        self.required
    }

    pub fn placed_adjacent(&self) -> usize {
        self.placed_adjacent
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn collected_by(&self) -> Option<Color> {
        self.collected_by
    }

    /// True once every cell touching this chip holds a tile.
    pub fn is_surrounded(&self) -> bool {
        self.placed_adjacent >= self.required
    }

    /// Record one tile corner landing on this chip.
    pub(crate) fn accumulate(&mut self, color: Color, value: u8) {
        self.distribution.add(color, value);
        self.placed_adjacent += 1;
        debug!(
            chip = ?self.position,
            %color,
            value,
            placed = self.placed_adjacent,
            required = self.required,
            "accumulated"
        );
    }

    /// Resolve the chip if it is surrounded and not collected yet.
    ///
    /// Returns the resolution the first time only; later calls are no-ops.
    pub fn try_resolve(&mut self) -> Option<ChipResolution> {
        if self.collected || !self.is_surrounded() {
            return None;
        }
        let owner = resolve(&self.distribution);
        self.collected = true;
        self.collected_by = owner;
        match owner {
            Some(c) => info!(chip = ?self.position, owner = %c, points = self.value, "chip resolved"),
            None => info!(chip = ?self.position, "chip resolved with no owner"),
        }
        Some(ChipResolution {
            position: self.position,
            owner,
            points: self.value,
        })
    }

    pub fn snapshot(&self) -> ChipSnapshot {
        ChipSnapshot {
            position: self.position,
            value: self.value,
            required_adjacency: self.required,
            placed_adjacent: self.placed_adjacent,
            distribution: self.distribution.clone(),
            percentage_view: self.distribution.percentages(),
            collected: self.collected,
            collected_by: self.collected_by,
        }
    }
}

/// All chips of one board, row-major over the intersections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipRegistry {
    size: usize,
    chips: Vec<Chip>,
}

impl ChipRegistry {
    /// Shuffle the chip value multiset and lay it out across the intersections.
    pub fn new(size: usize, rng: &mut Rng) -> Result<Self> {
        let mut values = value_multiset((size + 1) * (size + 1));
        rng.shuffle(&mut values);
        Self::with_values(size, &values)
    }

    /// Lay out `values` left to right, top to bottom.
    ///
    /// Needs exactly one value per intersection.
    pub fn with_values(size: usize, values: &[u8]) -> Result<Self> {
        let side = size + 1;
        if values.len() != side * side {
            return Err(GameError::InvalidBoardSize(size));
        }
        let chips = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Chip::new(v, (i / side, i % side), size))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { size, chips })
    }

    /// Board size in cells (intersections run `0..=size`).
    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        (row <= self.size && col <= self.size).then(|| row * (self.size + 1) + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Chip> {
        self.idx(row, col).map(|i| &self.chips[i])
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Chip> {
        self.idx(row, col).map(|i| &mut self.chips[i])
    }

    pub fn required_adjacency(&self, row: usize, col: usize) -> usize {
        required_adjacency(self.size, row, col)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chip> {
        self.chips.iter()
    }

    /// Sum of chip values, resolved or not.
    pub fn total_value(&self) -> u32 {
        self.chips.iter().map(|c| u32::from(c.value)).sum()
    }
}
