//! Bounded Game of Life engine
//!
//! This library steps a finite Conway's Game of Life board one generation at
//! a time. Cells outside the board count as dead.

pub mod config;
pub mod driver;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use driver::Autoplay;
pub use error::{LifeError, LifeResult};
pub use game_of_life::{Cell, Grid, Simulation};

/// Advance a seed `generations` steps and return the resulting board
pub fn evolve(seed: &[Vec<u8>], generations: usize) -> LifeResult<Vec<Vec<u8>>> {
    let mut simulation = Simulation::from_bits(seed)?;
    simulation.step_n(generations);
    Ok(simulation.board().to_bits())
}
