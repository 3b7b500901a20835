//! Grid coordinates, timed coordinates, and the static cell state they sit on.

use std::fmt;

/// A point on the 2D integer grid. Totally ordered lexicographically by
/// `(x, y)` so that tie-breaks in priority queues are deterministic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Exact Manhattan distance to `other`, used as the RRA* backward-search
    /// heuristic and for bounds-free distance estimates.
    #[inline]
    pub fn manhattan_distance(self, other: Cell) -> i64 {
        (self.x as i64 - other.x as i64).abs() + (self.y as i64 - other.y as i64).abs()
    }

    /// Lift to a [`TimedCell`] at time `t`.
    #[inline]
    pub const fn at_time(self, t: Time) -> TimedCell {
        TimedCell { x: self.x, y: self.y, t }
    }

    /// The four 4-connected neighbors of this cell, in a fixed deterministic
    /// order (does not include `self` — callers that want the wait option
    /// add it explicitly, since not every caller wants it).
    #[inline]
    pub fn neighbors(self) -> [Cell; 4] {
        [
            Cell::new(self.x + 1, self.y),
            Cell::new(self.x - 1, self.y),
            Cell::new(self.x, self.y + 1),
            Cell::new(self.x, self.y - 1),
        ]
    }

    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Discrete simulation time. Signed: reservation cleanup cutoffs are computed
/// as `min_t - 4*W` and can be negative in the first few ticks of a run.
pub type Time = i64;

/// A [`Cell`] tagged with a time step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedCell {
    pub x: i32,
    pub y: i32,
    pub t: Time,
}

impl TimedCell {
    #[inline]
    pub const fn new(x: i32, y: i32, t: Time) -> Self {
        TimedCell { x, y, t }
    }

    #[inline]
    pub const fn from_cell(c: Cell, t: Time) -> Self {
        TimedCell { x: c.x, y: c.y, t }
    }

    #[inline]
    pub const fn to_cell(self) -> Cell {
        Cell { x: self.x, y: self.y }
    }
}

impl fmt::Display for TimedCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, t={})", self.x, self.y, self.t)
    }
}

/// Static occupancy of a grid cell, fixed at environment construction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Free,
    Blocked,
}

impl CellState {
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, CellState::Free)
    }
}
