// ABOUTME: Command line entry point for colgrid.
// ABOUTME: Loads grid settings, lays out the given item sizes, prints placements.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use colgrid_core::{GridConfig, Size};
use colgrid_layout::{ColumnMajorGrid, FixedItem};
use report::Report;

#[derive(Debug, Parser)]
#[command(name = "colgrid", version, about = "Lay out items in a column-major uniform grid")]
struct Cli {
    /// Item sizes as WIDTHxHEIGHT, in order
    #[arg(value_name = "SIZE")]
    items: Vec<Size>,

    /// Config file (defaults to ~/.config/colgrid/config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override max_columns
    #[arg(long, allow_negative_numbers = true)]
    columns: Option<i32>,

    /// Override column_spacing
    #[arg(long, allow_negative_numbers = true)]
    column_spacing: Option<f32>,

    /// Override row_spacing
    #[arg(long, allow_negative_numbers = true)]
    row_spacing: Option<f32>,

    /// Size offered to every item during measurement
    #[arg(long, default_value = "1000x1000")]
    available: Size,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    fn load_config(&self) -> Result<GridConfig> {
        let mut config = match &self.config {
            Some(path) => GridConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GridConfig::load_or_default()
                .context("Failed to load config from the default location")?,
        };
        if let Some(columns) = self.columns {
            config.max_columns = columns;
        }
        if let Some(spacing) = self.column_spacing {
            config.column_spacing = spacing;
        }
        if let Some(spacing) = self.row_spacing {
            config.row_spacing = spacing;
        }
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    let mut grid = ColumnMajorGrid::from_config(&config).context("Invalid grid settings")?;
    tracing::info!(
        max_columns = grid.max_columns(),
        column_spacing = grid.column_spacing(),
        row_spacing = grid.row_spacing(),
        "Loaded grid settings"
    );

    if cli.save_config {
        let path = match &cli.config {
            Some(path) => {
                config.save(path)?;
                path.clone()
            }
            None => config.save_to_default()?,
        };
        tracing::info!("Saved config to {}", path.display());
    }

    let mut items: Vec<FixedItem> = cli.items.iter().copied().map(FixedItem::new).collect();
    let desired = grid.measure(Some(items.as_mut_slice()), cli.available);
    grid.arrange(Some(items.as_mut_slice()), desired)?;

    let report = Report::new(&grid, &items, desired);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use colgrid_core::ConfigError;

    fn cli_with_config(args: &[&str]) -> (Cli, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        GridConfig::default().save(&path).unwrap();

        let mut argv = vec!["colgrid", "--config", path.to_str().unwrap()];
        argv.extend_from_slice(args);
        (Cli::try_parse_from(argv).unwrap(), dir)
    }

    #[test]
    fn negative_columns_reach_validation() {
        let (cli, _dir) = cli_with_config(&["--columns", "-1", "4x4"]);
        assert_eq!(cli.columns, Some(-1));

        let config = cli.load_config().unwrap();
        assert!(matches!(
            ColumnMajorGrid::from_config(&config),
            Err(ConfigError::InvalidMaxColumns(-1))
        ));
    }

    #[test]
    fn negative_spacing_reaches_validation() {
        let (cli, _dir) = cli_with_config(&["--row-spacing", "-2.5"]);
        let config = cli.load_config().unwrap();
        assert!(matches!(
            ColumnMajorGrid::from_config(&config),
            Err(ConfigError::InvalidSpacing { name: "row_spacing", .. })
        ));
    }

    #[test]
    fn overrides_apply_on_top_of_file() {
        let (cli, _dir) = cli_with_config(&["--columns", "3", "--column-spacing", "2", "1x1", "2x3"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.max_columns, 3);
        assert_eq!(config.column_spacing, 2.0);
        assert_eq!(cli.items, vec![Size::new(1.0, 1.0), Size::new(2.0, 3.0)]);
    }
}
