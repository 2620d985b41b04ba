//! Conway's Game of Life transition rules

use super::Cell;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Next state of a cell given its current state and live neighbor count
    pub fn next_state(current: Cell, neighbor_count: u8) -> Cell {
        match (current, neighbor_count) {
            // Underpopulation
            (Cell::Alive, n) if n < 2 => Cell::Dead,
            // Survival
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            // Overpopulation
            (Cell::Alive, _) => Cell::Dead,
            // Birth
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }
}
