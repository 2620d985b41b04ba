//! Command line runner for the bounded Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_engine::{
    config::{CliOverrides, OutputFormat, Settings},
    driver::Autoplay,
    game_of_life::{create_example_seeds, load_grid_from_file, save_grid_to_file, Simulation},
    utils::{BoardFormatter, ColorOutput},
};
use std::io::Write;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game_of_life_engine")]
#[command(about = "Bounded Conway's Game of Life simulator")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Autoplay a seed, printing each generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed file (overrides config)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Run until interrupted
        #[arg(long, conflicts_with = "generations")]
        forever: bool,

        /// Delay after each step in milliseconds (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Advance a seed without delay and print the final board
    Step {
        /// Seed file
        #[arg(short, long)]
        seed: PathBuf,

        /// Number of generations
        #[arg(short, long, default_value = "1")]
        generations: usize,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a default configuration and example seeds
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Print a seed with coordinates
    Show {
        /// Seed file
        seed: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            config,
            seed,
            generations,
            forever,
            interval_ms,
            format,
        } => {
            let overrides = CliOverrides {
                generations,
                forever,
                tick_interval_ms: interval_ms,
                seed_file: seed,
                format,
            };
            run_command(&config, &overrides, &mut std::io::stdout().lock())
        }
        Commands::Step {
            seed,
            generations,
            output,
        } => step_command(&seed, generations, output.as_deref()),
        Commands::Setup { directory, force } => setup_command(&directory, force),
        Commands::Show { seed } => show_command(&seed),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        let settings = Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        info!(path = %config_path.display(), "loaded configuration");
        Ok(settings)
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
        Ok(Settings::default())
    }
}

fn run_command<W: Write>(config_path: &Path, overrides: &CliOverrides, out: &mut W) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;

    let seed = load_grid_from_file(&settings.input.seed_file)?;
    let mut simulation = Simulation::new(&seed);

    let format = settings.output.format;
    let show_header = settings.output.show_generation_header;

    let initial = BoardFormatter::format_generation(&simulation, format, show_header)?;
    writeln!(out, "{}", initial).context("Failed to write output")?;

    let mut write_error = None;
    let autoplay = Autoplay::new(settings.simulation.tick_interval())
        .with_limit(settings.simulation.generations);
    autoplay.run(&mut simulation, |sim| {
        let written = BoardFormatter::format_generation(sim, format, show_header)
            .and_then(|text| writeln!(out, "{}", text).context("Failed to write output"));
        match written {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        }
    });

    if let Some(e) = write_error {
        return Err(e);
    }
    Ok(())
}

fn step_command(seed_path: &Path, generations: usize, output: Option<&Path>) -> Result<()> {
    let seed = load_grid_from_file(seed_path)?;
    let mut simulation = Simulation::new(&seed);
    simulation.step_n(generations);

    match output {
        Some(path) => {
            save_grid_to_file(simulation.board(), path)?;
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Generation {} written to {}",
                    simulation.generation(),
                    path.display()
                ))
            );
        }
        None => println!("{}", simulation.render()),
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    let seeds_dir = directory.join("seeds");

    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_seeds(&seeds_dir).context("Failed to create example seeds")?;
    println!("Created example seeds in: {}", seeds_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: game_of_life_engine run --config {}", config_path.display());

    Ok(())
}

fn show_command(seed_path: &Path) -> Result<()> {
    let grid = load_grid_from_file(seed_path)?;

    println!("Seed ({}x{}):", grid.height(), grid.width());
    println!("{}", BoardFormatter::format_grid_with_coords(&grid));
    println!("Living cells: {}", grid.living_count());
    println!(
        "Density: {:.1}%",
        grid.living_count() as f64 / (grid.width() * grid.height()) as f64 * 100.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_engine",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--format",
            "plain",
        ]);
        assert!(cli.is_ok());

        let conflicting = Cli::try_parse_from([
            "game_of_life_engine",
            "run",
            "--generations",
            "5",
            "--forever",
        ]);
        assert!(conflicting.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("seeds/blinker.txt").exists());
    }

    #[test]
    fn test_step_command_writes_output() {
        let temp_dir = tempdir().unwrap();
        let seed = temp_dir.path().join("seed.txt");
        let out = temp_dir.path().join("out/next.txt");
        std::fs::write(&seed, "0 1 0\n0 1 0\n0 1 0\n").unwrap();

        step_command(&seed, 1, Some(out.as_path())).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "0 0 0\n1 1 1\n0 0 0\n");
    }

    #[test]
    fn test_run_command_with_overrides() {
        let temp_dir = tempdir().unwrap();
        let seed = temp_dir.path().join("seed.txt");
        std::fs::write(&seed, "1 1\n1 1\n").unwrap();

        let overrides = CliOverrides {
            generations: Some(2),
            tick_interval_ms: Some(0),
            seed_file: Some(seed),
            format: Some(OutputFormat::Plain),
            ..Default::default()
        };
        let mut out = Vec::new();
        run_command(&temp_dir.path().join("missing.yaml"), &overrides, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let block = "1 1\n1 1\n\n";
        assert_eq!(
            text,
            format!(
                "Generation 0 (Living: 4):\n{block}Generation 1 (Living: 4):\n{block}Generation 2 (Living: 4):\n{block}"
            )
        );
    }
}
