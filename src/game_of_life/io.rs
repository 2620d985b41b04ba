//! Seed file I/O
//!
//! Format: one row per line, `0` for dead and `1` for alive, optionally
//! separated by whitespace. Blank lines and lines starting with `#` are
//! skipped, so `Grid::render` output is a valid seed file.

use super::{Cell, Grid};
use crate::error::{LifeError, LifeResult};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Built-in example seeds written by [`create_example_seeds`]
pub const EXAMPLE_SEEDS: [(&str, &str); 4] = [
    ("blinker", "0 0 0 0 0\n0 0 0 0 0\n0 1 1 1 0\n0 0 0 0 0\n0 0 0 0 0\n"),
    ("block", "0 0 0 0\n0 1 1 0\n0 1 1 0\n0 0 0 0\n"),
    (
        "glider",
        "0 0 1 0 0 0\n1 0 1 0 0 0\n0 1 1 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0\n0 0 0 0 0 0\n",
    ),
    ("beacon", "1 1 0 0\n1 1 0 0\n0 0 1 1\n0 0 1 1\n"),
];

/// Parse a grid from its text representation
pub fn parse_grid_from_string(content: &str) -> LifeResult<Grid> {
    let rows = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .enumerate()
        .map(|(row, line)| parse_row(row, line))
        .collect::<LifeResult<Vec<_>>>()?;

    Grid::from_cells(rows)
}

fn parse_row(row: usize, line: &str) -> LifeResult<Vec<Cell>> {
    line.chars()
        .filter(|ch| !ch.is_whitespace())
        .enumerate()
        .map(|(col, ch)| match ch {
            '0' => Ok(Cell::Dead),
            '1' => Ok(Cell::Alive),
            other => Err(LifeError::InvalidCell {
                row,
                col,
                value: other.to_string(),
            }),
        })
        .collect()
}

/// Load a grid from a seed file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let grid = parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;
    info!(
        path = %path.display(),
        height = grid.height(),
        width = grid.width(),
        "loaded seed"
    );
    Ok(grid)
}

/// Save a grid to a file, creating parent directories as needed
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = grid.render();
    content.push('\n');
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.display()))?;

    Ok(())
}

/// Write the example seeds into `output_dir` as `<name>.txt`
pub fn create_example_seeds<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for (name, content) in EXAMPLE_SEEDS {
        let path = dir.join(format!("{}.txt", name));
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_string() {
        let grid = parse_grid_from_string("0 1 0\n1 0 1\n0 1 0\n").unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.living_cells(), vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_compact_rows_and_comments() {
        let grid = parse_grid_from_string("# glider\n\n010\n001\n111\n").unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_render_output_parses_back() {
        let grid = parse_grid_from_string("1 0 0 1\n0 1 1 0\n").unwrap();
        assert_eq!(parse_grid_from_string(&grid.render()).unwrap(), grid);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            parse_grid_from_string("0 1 0\n1 X 1\n"),
            Err(LifeError::InvalidCell { row: 1, col: 1, .. })
        ));
        assert!(matches!(
            parse_grid_from_string("0 1 0\n1 1\n"),
            Err(LifeError::InvalidGrid { .. })
        ));
        assert!(matches!(
            parse_grid_from_string("\n# nothing here\n"),
            Err(LifeError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/seed.txt");

        let grid = Grid::from_bits(&[vec![1, 0, 1], vec![0, 1, 0]]).unwrap();
        save_grid_to_file(&grid, &file_path).unwrap();

        let loaded = load_grid_from_file(&file_path).unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(load_grid_from_file(temp_dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn test_create_example_seeds() {
        let temp_dir = tempdir().unwrap();
        create_example_seeds(temp_dir.path()).unwrap();

        for (name, _) in EXAMPLE_SEEDS {
            assert!(temp_dir.path().join(format!("{}.txt", name)).exists());
        }

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.width(), 6);
        assert_eq!(glider.height(), 6);
        assert_eq!(glider.living_count(), 5);
    }
}
