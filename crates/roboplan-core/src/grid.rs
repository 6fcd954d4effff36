//! Floor occupancy grids and their solver fact encoding.

use crate::facility::Dimensions;
use crate::geometry::{Position, SolverCell};
use serde::{Deserialize, Serialize};

/// Cell is walkable.
pub const FREE: u8 = 0;
/// Cell is occupied by a room interior or an elevator.
pub const BLOCKED: u8 = 1;

/// A `height x width` matrix of occupancy bits for one floor.
///
/// Rows follow the domain x-axis, columns the y-axis, matching the solver's
/// `(column, row)` convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl OccupancyGrid {
    /// Creates an all-free grid sized after a building footprint.
    pub fn new(dimensions: Dimensions) -> Self {
        let height = dimensions.length as usize;
        let width = dimensions.width as usize;
        Self {
            height,
            width,
            cells: vec![FREE; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        let (row, column) = (position.x as usize, position.y as usize);
        (row < self.height && column < self.width).then(|| row * self.width + column)
    }

    /// Value at a domain position, `None` when outside the grid.
    pub fn get(&self, position: Position) -> Option<u8> {
        self.index_of(position).map(|i| self.cells[i])
    }

    /// Sets a domain position. Returns `false` when it lies outside the grid.
    pub fn set(&mut self, position: Position, value: u8) -> bool {
        match self.index_of(position) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Sets a cell addressed in solver coordinates (`offset`-indexed).
    ///
    /// Returns `false` when the cell lies outside the grid.
    pub fn set_solver_cell(&mut self, cell: SolverCell, offset: i64, value: u8) -> bool {
        let row = cell.row - offset;
        let column = cell.column - offset;
        if row < 0 || column < 0 {
            return false;
        }
        let (Ok(row), Ok(column)) = (u32::try_from(row), u32::try_from(column)) else {
            return false;
        };
        self.set(Position::new(row, column), value)
    }

    /// Value at a solver cell (`offset`-indexed).
    pub fn get_solver_cell(&self, cell: SolverCell, offset: i64) -> Option<u8> {
        let row = u32::try_from(cell.row - offset).ok()?;
        let column = u32::try_from(cell.column - offset).ok()?;
        self.get(Position::new(row, column))
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Encodes the grid as solver facts `m(floorId, column, row, value)`,
    /// rows outer and columns inner, both shifted by `offset`.
    pub fn to_facts(&self, floor_id: &str, offset: i64) -> Vec<String> {
        let mut facts = Vec::with_capacity(self.height * self.width);
        for row in 0..self.height {
            for column in 0..self.width {
                let value = self.cells[row * self.width + column];
                facts.push(format!(
                    "m({}, {}, {}, {})",
                    floor_id,
                    column as i64 + offset,
                    row as i64 + offset,
                    value
                ));
            }
        }
        facts
    }
}

/// A compiled floor plan as handed to the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub height: usize,
    pub width: usize,
    pub cells: Vec<String>,
}

impl FloorPlan {
    /// Encodes `grid` in the solver frame given by `offset`.
    pub fn from_grid(floor_id: &str, grid: &OccupancyGrid, offset: i64) -> Self {
        Self {
            height: grid.height(),
            width: grid.width(),
            cells: grid.to_facts(floor_id, offset),
        }
    }
}
