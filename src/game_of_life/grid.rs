//! Grid representation and utilities for Game of Life

use super::Cell;
use crate::error::{LifeError, LifeResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offsets of the eight Moore neighbors
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A bounded, rectangular Game of Life grid
///
/// Dimensions are fixed at construction and the grid is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<u8>>", try_from = "Vec<Vec<u8>>")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> LifeResult<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::invalid_grid(format!(
                "dimensions must be positive, got {}x{}",
                height, width
            )));
        }
        let size = width
            .checked_mul(height)
            .ok_or_else(|| LifeError::invalid_grid("grid dimensions overflow"))?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
        })
    }

    /// Create a grid from rows of cells
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> LifeResult<Self> {
        let (height, width) = check_shape(&rows)?;
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();

        Ok(Self { width, height, cells })
    }

    /// Create a grid from rows of booleans
    pub fn from_bools(rows: &[Vec<bool>]) -> LifeResult<Self> {
        Self::from_cells(
            rows.iter()
                .map(|row| row.iter().copied().map(Cell::from).collect())
                .collect(),
        )
    }

    /// Create a grid from rows of 0/1 integers
    pub fn from_bits(rows: &[Vec<u8>]) -> LifeResult<Self> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &bit)| Cell::from_bit(bit, r, c))
                    .collect::<LifeResult<Vec<_>>>()
            })
            .collect::<LifeResult<Vec<_>>>()?;
        Self::from_cells(cells)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at coordinates; out of bounds cells are dead
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    /// Set cell at coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> LifeResult<()> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::invalid_grid(format!(
                "coordinates ({}, {}) out of bounds for {}x{} grid",
                row, col, self.height, self.width
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Write a cell known to be in bounds
    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Count living neighbors of a cell. Positions outside the grid count as dead.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.is_neighbor_alive(row as isize + dr, col as isize + dc))
            .count() as u8
    }

    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 || row >= self.height as isize || col >= self.width as isize {
            return false;
        }
        self.cells[self.index(row as usize, col as usize)].is_alive()
    }

    /// Row-major iterator over `(row, col, cell)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / self.width, i % self.width, cell))
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Owned copy as rows of 0/1 integers
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.as_bit()).collect())
            .collect()
    }

    /// Text form: `0`/`1` separated by single spaces, one line per row
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Validate that rows are non-empty and rectangular, returning `(height, width)`
fn check_shape<T>(rows: &[Vec<T>]) -> LifeResult<(usize, usize)> {
    let first = rows
        .first()
        .ok_or_else(|| LifeError::invalid_grid("grid has no rows"))?;
    let width = first.len();
    if width == 0 {
        return Err(LifeError::invalid_grid("grid width cannot be zero"));
    }

    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(LifeError::invalid_grid(format!(
                "row {} has length {}, expected {}",
                i,
                row.len(),
                width
            )));
        }
    }

    Ok((rows.len(), width))
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_bits()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = LifeError;

    fn try_from(rows: Vec<Vec<u8>>) -> LifeResult<Self> {
        Grid::from_bits(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.as_bit()).join(" "))
            .join("\n");
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_bits() {
        let grid = Grid::from_bits(&[vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 1]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.living_count(), 5);
        assert_eq!(grid.get(1, 1), Cell::Alive);
        assert_eq!(grid.get(5, 5), Cell::Dead);
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(matches!(
            Grid::from_bits(&[]),
            Err(LifeError::InvalidGrid { .. })
        ));
        assert!(matches!(
            Grid::from_bits(&[vec![], vec![]]),
            Err(LifeError::InvalidGrid { .. })
        ));
        assert!(matches!(
            Grid::from_bools(&[vec![true, false], vec![true]]),
            Err(LifeError::InvalidGrid { .. })
        ));
        assert!(matches!(
            Grid::from_bits(&[vec![0, 3]]),
            Err(LifeError::InvalidCell { row: 0, col: 1, .. })
        ));
        assert!(Grid::new(0, 4).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(matches!(
            Grid::new(usize::MAX, 2),
            Err(LifeError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = Grid::from_bits(&[vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();

        // Center cell sees the full ring
        assert_eq!(grid.count_neighbors(1, 1), 8);

        // Corner: only (0,1) and (1,0) are alive in bounds, center is dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
        assert_eq!(grid.count_neighbors(0, 1), 4);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let grid = Grid::from_bits(&[vec![1, 0, 1], vec![0, 0, 0], vec![1, 0, 1]]).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 0);
        assert_eq!(grid.count_neighbors(2, 2), 0);
        assert_eq!(grid.count_neighbors(1, 1), 4);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 1, Cell::Alive).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 1)]);
        assert!(grid.set(2, 0, Cell::Alive).is_err());
    }

    #[test]
    fn test_render() {
        let grid = Grid::from_bits(&[vec![0, 1, 0], vec![1, 1, 0]]).unwrap();
        assert_eq!(grid.render(), "0 1 0\n1 1 0");
        assert_eq!(grid.to_bits(), vec![vec![0, 1, 0], vec![1, 1, 0]]);
    }

    #[test]
    fn test_json_uses_bit_rows() {
        let grid = Grid::from_bits(&[vec![1, 0], vec![0, 1]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[1,0],[0,1]]");

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid>("[[1,0],[1]]").is_err());
    }
}
