//! Simulation engine: owns the current generation and steps it forward

use super::{Cell, GameOfLifeRules, Grid};
use crate::error::LifeResult;
use tracing::debug;

/// A bounded Game of Life simulation
///
/// `step` takes `&mut self` and `board` hands out a shared borrow, so a step
/// can never be observed half-done. Hosts that share a simulation across
/// threads wrap it in a `Mutex`.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Grid,
    previous: Option<Grid>,
    generation: u64,
}

impl Simulation {
    /// Create a simulation whose generation 0 is a copy of `seed`
    pub fn new(seed: &Grid) -> Self {
        Self {
            current: seed.clone(),
            previous: None,
            generation: 0,
        }
    }

    /// Create a simulation from rows of 0/1 integers
    pub fn from_bits(seed: &[Vec<u8>]) -> LifeResult<Self> {
        Ok(Self::new(&Grid::from_bits(seed)?))
    }

    /// Create a simulation from rows of booleans
    pub fn from_bools(seed: &[Vec<bool>]) -> LifeResult<Self> {
        Ok(Self::new(&Grid::from_bools(seed)?))
    }

    /// Create a simulation from rows of cells
    pub fn from_cells(seed: Vec<Vec<Cell>>) -> LifeResult<Self> {
        Ok(Self::new(&Grid::from_cells(seed)?))
    }

    /// Advance one generation
    pub fn step(&mut self) {
        // Reuse the snapshot buffer once it exists
        let previous = self.previous.get_or_insert_with(|| self.current.clone());
        previous.clone_from(&self.current);

        for row in 0..previous.height() {
            for col in 0..previous.width() {
                let neighbors = previous.count_neighbors(row, col);
                let next = GameOfLifeRules::next_state(previous.get(row, col), neighbors);
                self.current.put(row, col, next);
            }
        }

        self.generation += 1;
        debug!(
            generation = self.generation,
            living = self.current.living_count(),
            "advanced generation"
        );
    }

    /// Advance `generations` times
    pub fn step_n(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// The current generation
    pub fn board(&self) -> &Grid {
        &self.current
    }

    /// The generation superseded by the last step, if any step has run
    pub fn previous(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    /// Text form of the current generation
    pub fn render(&self) -> String {
        self.current.render()
    }

    /// Number of steps taken so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }
}
