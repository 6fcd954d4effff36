//! Facility coordinates and the solver's cell convention.
//!
//! Domain positions are 0-indexed `(x, y)` cells. The solver addresses cells
//! as 1-indexed `(column, row)` pairs where the column follows the domain's
//! y-axis and the row follows the domain's x-axis.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// A 0-indexed cell inside a building's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The side a door or elevator opening faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

/// A cell in the solver's 1-indexed, axis-swapped convention.
///
/// Signed because a threshold computed for an opening on the building edge
/// can land outside the grid (column or row 0, or one past the end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolverCell {
    pub column: i64,
    pub row: i64,
}

impl SolverCell {
    pub fn new(column: i64, row: i64) -> Self {
        Self { column, row }
    }
}

/// Renders the cell the way the solver spells it in queries: `cel(column,row)`.
impl fmt::Display for SolverCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cel({},{})", self.column, self.row)
    }
}

/// Maps domain positions into solver cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateTransformer {
    offset: i64,
}

impl CoordinateTransformer {
    /// Offset between domain indices and solver indices.
    pub const DEFAULT_OFFSET: i64 = 1;

    pub fn new(offset: i64) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// The solver cell that holds a domain position, without any step.
    pub fn cell_of(&self, position: Position) -> SolverCell {
        SolverCell::new(
            i64::from(position.y) + self.offset,
            i64::from(position.x) + self.offset,
        )
    }

    /// The cell immediately outside an opening at `position` facing
    /// `orientation`, expressed as a solver `(column, row)`.
    pub fn threshold_cell(&self, position: Position, orientation: Orientation) -> SolverCell {
        let sx = i64::from(position.x) + self.offset;
        let sy = i64::from(position.y) + self.offset;

        match orientation {
            Orientation::South => SolverCell::new(sy + 1, sx),
            Orientation::North => SolverCell::new(sy - 1, sx),
            Orientation::East => SolverCell::new(sy, sx + 1),
            Orientation::West => SolverCell::new(sy, sx - 1),
        }
    }
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET)
    }
}
