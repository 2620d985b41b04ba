//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{Grid, Simulation};
use anyhow::{Context, Result};
use serde::Serialize;

/// Formats boards for the terminal
pub struct BoardFormatter;

#[derive(Serialize)]
struct GenerationRecord<'a> {
    generation: u64,
    living: usize,
    board: &'a Grid,
}

impl BoardFormatter {
    /// Format a grid with block characters
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                output.push(if grid.get(y, x).is_alive() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column numbers
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width() {
                output.push_str(if grid.get(y, x).is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format the current generation of a simulation in the requested format
    pub fn format_generation(
        simulation: &Simulation,
        format: OutputFormat,
        show_header: bool,
    ) -> Result<String> {
        let board = simulation.board();
        let mut output = String::new();

        if show_header && format != OutputFormat::Json {
            output.push_str(&format!(
                "Generation {} (Living: {}):\n",
                simulation.generation(),
                board.living_count()
            ));
        }

        match format {
            OutputFormat::Plain => {
                output.push_str(&board.render());
                output.push('\n');
            }
            OutputFormat::Visual => output.push_str(&Self::format_grid_compact(board)),
            OutputFormat::Json => {
                let record = GenerationRecord {
                    generation: simulation.generation(),
                    living: board.living_count(),
                    board,
                };
                output.push_str(
                    &serde_json::to_string(&record).context("Failed to serialize generation")?,
                );
                output.push('\n');
            }
        }

        Ok(output)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}
