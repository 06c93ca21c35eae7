//! Constants for board geometry, value ranges, and game setup.
//!
//! Board size and player count are runtime settings (see [`crate::game::GameConfig`]);
//! the values here are the defaults and the fixed bounds every game shares.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN tiles). The board has (N+1)x(N+1) chip intersections.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Smallest board that still has an interior cell for the opening placement.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board. Keeps the value multisets and text output sane.
pub const MAX_BOARD_SIZE: usize = 16;

/// Number of corners on a tile (and chips touched by one placement).
pub const CORNERS: usize = 4;

/// Offsets from a cell's top-left intersection to the chip under each tile corner.
/// Order: corner 0 top-left, corner 1 top-right, corner 2 bottom-right, corner 3 bottom-left.
pub const CORNER_OFFSETS: [(usize, usize); CORNERS] = [(0, 0), (0, 1), (1, 1), (1, 0)];

/// Orthogonal neighbor offsets (North, East, South, West).
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

// =============================================================================
// Values
// =============================================================================

/// Lowest value a chip or tile can carry.
pub const MIN_VALUE: u8 = 1;

/// Highest value a chip or tile can carry.
pub const MAX_VALUE: u8 = 6;

// =============================================================================
// Players
// =============================================================================

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game supports (one per color).
pub const MAX_PLAYERS: usize = 4;

/// Default player count for a new game.
pub const DEFAULT_PLAYERS: usize = 2;

/// Seed used by the demo binary when none is given.
pub const DEFAULT_SEED: u64 = 42;
