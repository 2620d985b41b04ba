//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod io;
pub mod rules;
pub mod simulation;

pub use cell::Cell;
pub use grid::Grid;
pub use io::{create_example_seeds, load_grid_from_file, parse_grid_from_string, save_grid_to_file};
pub use rules::GameOfLifeRules;
pub use simulation::Simulation;
