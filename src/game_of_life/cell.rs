//! Binary cell state

use crate::error::{LifeError, LifeResult};

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Integer form used at the external boundary
    #[inline]
    pub fn as_bit(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Convert a 0/1 integer, reporting the position of anything else
    pub fn from_bit(bit: u8, row: usize, col: usize) -> LifeResult<Self> {
        match bit {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(LifeError::InvalidCell {
                row,
                col,
                value: other.to_string(),
            }),
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}
