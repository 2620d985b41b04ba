//! Configuration settings for the simulation runner

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generations to run; `None` runs until interrupted
    pub generations: Option<u64>,
    /// Delay after each completed step during autoplay
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub seed_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_generation_header: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `0`/`1` rows, identical to `Grid::render`
    Plain,
    /// Block characters for terminals
    Visual,
    /// One JSON document per generation
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                generations: Some(10),
                tick_interval_ms: 1000,
            },
            input: InputConfig {
                seed_file: PathBuf::from("seeds/glider.txt"),
            },
            output: OutputConfig {
                format: OutputFormat::Visual,
                show_generation_header: true,
            },
        }
    }
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == Some(0) {
            anyhow::bail!("Number of generations must be positive");
        }

        if !self.input.seed_file.exists() {
            anyhow::bail!("Seed file does not exist: {}", self.input.seed_file.display());
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = Some(generations);
        }
        if cli_overrides.forever {
            self.simulation.generations = None;
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(ref seed_file) = cli_overrides.seed_file {
            self.input.seed_file = seed_file.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<u64>,
    pub forever: bool,
    pub tick_interval_ms: Option<u64>,
    pub seed_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}
