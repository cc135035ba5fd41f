//! 2-D occupancy grid

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfinderError};
use crate::topology::Topology;

/// A grid position as (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = WayfinderError;

    /// Parse a `row,col` pair, e.g. `6,0`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WayfinderError::InvalidCell(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        Ok(Cell {
            row: row.trim().parse().map_err(|_| invalid())?,
            col: col.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Neighbor offsets in traversal order: right, down, left, up.
///
/// DFS and DLS paths depend on this order; it must not change.
const OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A rectangular occupancy grid: 0 = passable, 1 = blocked.
///
/// Neighbors are computed on demand from the occupancy table, filtered
/// to in-bounds passable cells, in the [`OFFSETS`] order.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    rows: Vec<Vec<u8>>,
    n_rows: usize,
    n_cols: usize,
}

impl OccupancyGrid {
    /// Build a grid from occupancy rows.
    ///
    /// Rows are taken as given; use [`OccupancyGrid::from_path`] for
    /// untrusted input, which validates shape and cell values.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        OccupancyGrid {
            rows,
            n_rows,
            n_cols,
        }
    }

    /// Load a grid from a JSON file holding an array of equal-length
    /// rows of 0 (passable) / 1 (blocked).
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let rows: Vec<Vec<u8>> = serde_json::from_str(&text)
            .map_err(|e| WayfinderError::invalid_topology(path, e.to_string()))?;
        Self::validate(&rows).map_err(|reason| WayfinderError::invalid_topology(path, reason))?;
        Ok(Self::from_rows(rows))
    }

    fn validate(rows: &[Vec<u8>]) -> std::result::Result<(), String> {
        let Some(first) = rows.first() else {
            return Err("grid has no rows".to_string());
        };
        if first.is_empty() {
            return Err("grid rows are empty".to_string());
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != first.len() {
                return Err(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    first.len()
                ));
            }
            if let Some(c) = row.iter().position(|&v| v > 1) {
                return Err(format!("cell ({}, {}) must be 0 or 1", r, c));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.n_rows
    }

    pub fn cols(&self) -> usize {
        self.n_cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.n_rows && cell.col < self.n_cols
    }

    /// Whether the cell is passable. Out-of-bounds cells are not.
    pub fn is_free(&self, cell: Cell) -> bool {
        self.rows
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .is_some_and(|&v| v == 0)
    }
}

impl Topology for OccupancyGrid {
    type Node = Cell;

    fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        let mut result = Vec::with_capacity(OFFSETS.len());
        for (dr, dc) in OFFSETS {
            let Some(row) = cell.row.checked_add_signed(dr) else {
                continue;
            };
            let Some(col) = cell.col.checked_add_signed(dc) else {
                continue;
            };
            let neighbor = Cell::new(row, col);
            if self.in_bounds(neighbor) && self.is_free(neighbor) {
                result.push(neighbor);
            }
        }
        result
    }

    /// In-bounds check only; passability of a start/goal cell is the
    /// caller's concern.
    fn contains(&self, cell: &Cell) -> bool {
        self.in_bounds(*cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> OccupancyGrid {
        OccupancyGrid::from_rows(vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]])
    }

    #[test]
    fn test_neighbor_order_right_down_left_up() {
        let grid = open_grid();
        assert_eq!(
            grid.neighbors(&Cell::new(2, 1)),
            vec![Cell::new(2, 2), Cell::new(2, 0)]
        );
        // Center row: blocked (1,1) is filtered out
        assert_eq!(
            grid.neighbors(&Cell::new(1, 0)),
            vec![Cell::new(2, 0), Cell::new(0, 0)]
        );
    }

    #[test]
    fn test_corner_neighbors_stay_in_bounds() {
        let grid = open_grid();
        assert_eq!(
            grid.neighbors(&Cell::new(0, 0)),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
        assert_eq!(
            grid.neighbors(&Cell::new(2, 2)),
            vec![Cell::new(2, 1), Cell::new(1, 2)]
        );
    }

    #[test]
    fn test_contains_is_bounds_only() {
        let grid = open_grid();
        // (1,1) is blocked but still a position the grid knows about
        assert!(grid.contains(&Cell::new(1, 1)));
        assert!(!grid.contains(&Cell::new(3, 0)));
        assert!(!grid.is_free(Cell::new(1, 1)));
    }

    #[test]
    fn test_cell_parse_and_display() {
        let cell: Cell = "6,0".parse().unwrap();
        assert_eq!(cell, Cell::new(6, 0));
        assert_eq!(cell.to_string(), "(6, 0)");
        assert_eq!(" 3 , 3 ".parse::<Cell>().unwrap(), Cell::new(3, 3));
        assert!(matches!(
            "6;0".parse::<Cell>(),
            Err(WayfinderError::InvalidCell(_))
        ));
        assert!(matches!(
            "6,".parse::<Cell>(),
            Err(WayfinderError::InvalidCell(_))
        ));
    }

    #[test]
    fn test_from_path_rejects_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.json");
        std::fs::write(&path, "[[0, 0], [0]]").unwrap();
        let err = OccupancyGrid::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 cells, expected 2"));
    }

    #[test]
    fn test_from_path_rejects_bad_cell_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.json");
        std::fs::write(&path, "[[0, 2]]").unwrap();
        let err = OccupancyGrid::from_path(&path).unwrap_err();
        assert!(err.to_string().contains("must be 0 or 1"));
    }

    #[test]
    fn test_from_path_loads_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.json");
        std::fs::write(&path, "[[0, 1], [0, 0]]").unwrap();
        let grid = OccupancyGrid::from_path(&path).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert!(!grid.is_free(Cell::new(0, 1)));
    }
}
