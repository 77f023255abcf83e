//! Constants for board geometry, building tiers, and heuristic weights.
//!
//! The board is a fixed 5x5 grid. Rows grow downward (north is row 0) and
//! columns grow eastward, so `(0, 0)` is the north-west corner.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 5;

/// Number of workers on the board (two per player).
pub const NUM_WORKERS: usize = 4;

/// The single center cell, worth the most for centrality.
pub const CENTER: (i8, i8) = (2, 2);

// =============================================================================
// Building Tiers
// =============================================================================

/// Height of an unbuilt cell.
pub const GROUND: u8 = 0;

/// A worker standing on this tier wins the game.
pub const WIN_HEIGHT: u8 = 3;

/// Dome: the tier that caps a cell. Nobody may stand on or build on it.
pub const DOME: u8 = 4;

/// A worker may climb at most this many tiers in a single move.
pub const MAX_CLIMB: u8 = 1;

// =============================================================================
// Starting Layout
// =============================================================================

/// White's workers A and B.
pub const WHITE_START: [(i8, i8); 2] = [(3, 1), (1, 3)];

/// Blue's workers Y and Z.
pub const BLUE_START: [(i8, i8); 2] = [(1, 1), (3, 3)];

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Weight of the summed worker heights.
pub const HEIGHT_WEIGHT: i32 = 3;

/// Weight of the centrality score.
pub const CENTER_WEIGHT: i32 = 2;

/// Weight of the proximity-to-opponent score.
pub const DISTANCE_WEIGHT: i32 = 1;

/// The distance score is `DISTANCE_BASE` minus the summed nearest distances.
pub const DISTANCE_BASE: i32 = 8;

/// Multiplier applied to a candidate that steps onto the winning tier.
pub const WIN_MULTIPLIER: i32 = 10;

/// Centrality points for the center cell.
pub const CENTER_POINTS: i32 = 2;

/// Centrality points for a non-edge, non-center cell.
pub const INNER_POINTS: i32 = 1;

/// Centrality points for an edge or corner cell.
pub const EDGE_POINTS: i32 = 0;
