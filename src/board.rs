//! Board representation: cell heights plus worker positions.
//!
//! Heights live in a [`Grid`]; occupancy is never stored on the grid. It is
//! derived from the worker positions held by [`Board`], so the two can never
//! disagree. Both types are `Copy`, which makes snapshots and trial boards
//! plain value copies.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BLUE_START, DOME, GROUND, N, NUM_WORKERS, WHITE_START};
use crate::error::GameError;

/// A (row, column) pair.
///
/// Coordinates are signed so that stepping off the edge of the board yields
/// an out-of-bounds coordinate rather than a wrapped index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row, 0 at the north edge
    pub row: i8,
    /// Column, 0 at the west edge
    pub col: i8,
}

impl Coord {
    /// Coordinate at (`row`, `col`), on the board or not.
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True if the coordinate lies on the 5x5 board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..N as i8).contains(&self.row) && (0..N as i8).contains(&self.col)
    }

    /// The adjacent coordinate in `dir`. No bounds checking.
    #[inline]
    pub fn step(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        Coord::new(self.row + dr, self.col + dc)
    }

    /// Chebyshev distance: `max(|drow|, |dcol|)`.
    pub fn chebyshev(self, other: Coord) -> i32 {
        let dr = (self.row as i32 - other.row as i32).abs();
        let dc = (self.col as i32 - other.col as i32).abs();
        dr.max(dc)
    }

    /// True for any cell in the outer ring.
    pub fn on_edge(self) -> bool {
        let last = N as i8 - 1;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }
}

impl From<(i8, i8)> for Coord {
    fn from((row, col): (i8, i8)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions, in the order candidates are enumerated.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// (row, col) offset. North decreases the row.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    /// The direction pointing back the way this one came.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    /// Lower-case input token, e.g. `ne`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::NE => "ne",
            Direction::E => "e",
            Direction::SE => "se",
            Direction::S => "s",
            Direction::SW => "sw",
            Direction::W => "w",
            Direction::NW => "nw",
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == token)
            .ok_or_else(|| GameError::InvalidDirection(s.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player colors. White always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Blue,
}

impl Color {
    /// The other color.
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Blue,
            Color::Blue => Color::White,
        }
    }

    /// The two workers of this color.
    pub const fn workers(self) -> [WorkerId; 2] {
        match self {
            Color::White => [WorkerId::A, WorkerId::B],
            Color::Blue => [WorkerId::Y, WorkerId::Z],
        }
    }

    /// Lower-case name as printed in turn headers.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Blue => "blue",
        }
    }

    /// Index into per-color arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four workers. A and B belong to white, Y and Z to blue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WorkerId {
    A,
    B,
    Y,
    Z,
}

impl WorkerId {
    pub const ALL: [WorkerId; NUM_WORKERS] = [WorkerId::A, WorkerId::B, WorkerId::Y, WorkerId::Z];

    /// The color this worker plays for.
    pub const fn owner(self) -> Color {
        match self {
            WorkerId::A | WorkerId::B => Color::White,
            WorkerId::Y | WorkerId::Z => Color::Blue,
        }
    }

    /// Upper-case symbol shown on the board.
    pub const fn symbol(self) -> char {
        match self {
            WorkerId::A => 'A',
            WorkerId::B => 'B',
            WorkerId::Y => 'Y',
            WorkerId::Z => 'Z',
        }
    }

    /// Index into the board's worker positions.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for WorkerId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        WorkerId::ALL
            .into_iter()
            .find(|w| token.len() == 1 && token.starts_with(w.symbol()))
            .ok_or_else(|| GameError::InvalidWorker(s.to_string()))
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rendering view of one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Tier, 0 to 4
    pub height: u8,
    /// Worker standing here, if any
    pub occupant: Option<WorkerId>,
}

impl Cell {
    /// True once the cell carries a dome.
    pub fn is_capped(&self) -> bool {
        self.height >= DOME
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.occupant {
            Some(worker) => format!("{}{}", self.height, worker.symbol()),
            None => self.height.to_string(),
        };
        f.pad(&text)
    }
}

/// Tower heights, row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    heights: [[u8; N]; N],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// All cells at ground level.
    pub fn new() -> Self {
        Self {
            heights: [[GROUND; N]; N],
        }
    }

    /// Height at `at`, or `None` off the board.
    #[inline]
    pub fn height(&self, at: Coord) -> Option<u8> {
        at.in_bounds()
            .then(|| self.heights[at.row as usize][at.col as usize])
    }

    /// Add one tier at `at`. A capped cell stays capped.
    pub fn raise(&mut self, at: Coord) {
        debug_assert!(at.in_bounds(), "raise off the board at {at}");
        if at.in_bounds() {
            let h = &mut self.heights[at.row as usize][at.col as usize];
            *h = (*h + 1).min(DOME);
        }
    }

    /// Overwrite a height directly. Used to set up positions.
    pub fn set_height(&mut self, at: Coord, height: u8) {
        debug_assert!(at.in_bounds(), "set_height off the board at {at}");
        if at.in_bounds() {
            self.heights[at.row as usize][at.col as usize] = height.min(DOME);
        }
    }
}

/// The full physical state: grid plus every worker's position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Tower heights
    pub grid: Grid,
    /// Position of each worker, indexed by [`WorkerId::index`]
    workers: [Coord; NUM_WORKERS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Flat grid with the workers on their starting cells.
    pub fn new() -> Self {
        let [a, b] = WHITE_START;
        let [y, z] = BLUE_START;
        Self {
            grid: Grid::new(),
            workers: [a.into(), b.into(), y.into(), z.into()],
        }
    }

    /// Where `worker` stands.
    #[inline]
    pub fn position(&self, worker: WorkerId) -> Coord {
        self.workers[worker.index()]
    }

    /// Height at `at`, or `None` off the board.
    #[inline]
    pub fn height(&self, at: Coord) -> Option<u8> {
        self.grid.height(at)
    }

    /// Height under `worker`.
    pub fn worker_height(&self, worker: WorkerId) -> u8 {
        self.height(self.position(worker)).unwrap_or(GROUND)
    }

    /// The worker standing on `at`, if any.
    pub fn occupant(&self, at: Coord) -> Option<WorkerId> {
        WorkerId::ALL
            .into_iter()
            .find(|&w| self.workers[w.index()] == at)
    }

    /// Height and occupant of `at`, or `None` off the board.
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        self.height(at).map(|height| Cell {
            height,
            occupant: self.occupant(at),
        })
    }

    /// Row-major view of every cell, for rendering.
    pub fn cells(&self) -> [[Cell; N]; N] {
        std::array::from_fn(|r| {
            std::array::from_fn(|c| {
                let at = Coord::new(r as i8, c as i8);
                Cell {
                    height: self.grid.heights[r][c],
                    occupant: self.occupant(at),
                }
            })
        })
    }

    /// Relocate a worker. The target must be on the board.
    pub fn place(&mut self, worker: WorkerId, to: Coord) {
        debug_assert!(to.in_bounds(), "worker {worker} placed off the board at {to}");
        self.workers[worker.index()] = to;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "+--".repeat(N) + "+";
        for row in self.cells() {
            writeln!(f, "{rule}")?;
            write!(f, "|")?;
            for cell in row {
                write!(f, "{cell:<2}|")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{rule}")
    }
}
