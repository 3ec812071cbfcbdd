#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal front end for the vector map.
//!
//! Runs the interactive dashboard, starts the API server or exports a grid
//! layer as `GeoJSON`. With no subcommand, a menu picks the tool.

mod dashboard;
mod export;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use vector_map_fixtures::Fixtures;
use vector_map_grid::{DEFAULT_SEED, GridLayerSet};

#[derive(Parser)]
#[command(name = "vector_map_cli", about = "Vector control map toolchain")]
struct Cli {
    /// Seed for the synthetic grid layers
    #[arg(long, global = true, env = "GRID_SEED", default_value_t = DEFAULT_SEED)]
    seed: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the map and analytics interactively
    Dashboard,
    /// Start the API server
    Serve,
    /// Write one grid layer as a `GeoJSON` feature collection
    Export {
        /// Grid layer id, e.g. `water-index`
        #[arg(long)]
        layer: String,
        /// Output file
        #[arg(long)]
        out: PathBuf,
    },
}

/// Top-level tool selection for the interactive menu.
enum Tool {
    Dashboard,
    Server,
    Export,
}

impl Tool {
    const ALL: &[Self] = &[Self::Dashboard, Self::Server, Self::Export];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Open dashboard",
            Self::Server => "Start server",
            Self::Export => "Export grid layer (GeoJSON)",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dashboard) => run_dashboard(cli.seed)?,
        Some(Commands::Serve) => serve(cli.seed, false).await?,
        Some(Commands::Export { layer, out }) => {
            let grids = load_grids(cli.seed)?;
            export::export_layer(&grids, &layer, &out)?;
        }
        None => run_menu(cli.seed).await?,
    }

    Ok(())
}

async fn run_menu(seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    println!("Vector Control Map");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Dashboard => run_dashboard(seed)?,
        Tool::Server => serve(seed, true).await?,
        Tool::Export => {
            let grids = load_grids(seed)?;
            let ids: Vec<&str> = grids.layers().iter().map(|l| l.id.as_str()).collect();
            let layer = Select::new()
                .with_prompt("Layer")
                .items(&ids)
                .default(0)
                .interact()?;
            let out: String = Input::new()
                .with_prompt("Output file")
                .default(format!("{}.geojson", ids[layer]))
                .interact_text()?;
            export::export_layer(&grids, ids[layer], Path::new(&out))?;
        }
    }

    Ok(())
}

fn load_grids(seed: u64) -> Result<GridLayerSet, Box<dyn std::error::Error>> {
    let fixtures = Fixtures::load()?;
    Ok(GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, seed))
}

fn run_dashboard(seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let fixtures = Fixtures::load()?;
    let grids = GridLayerSet::build(&fixtures.zones, &fixtures.hotspots, seed);
    dashboard::run(&fixtures, &grids)
}

async fn serve(seed: u64, interactive: bool) -> Result<(), Box<dyn std::error::Error>> {
    // The server uses actix-web's runtime, so we need to run it
    // in a blocking task to avoid nesting tokio runtimes.
    if interactive {
        tokio::task::spawn_blocking(move || {
            actix_web::rt::System::new().block_on(vector_map_server::interactive::run(seed))
        })
        .await??;
    } else {
        tokio::task::spawn_blocking(move || {
            actix_web::rt::System::new().block_on(vector_map_server::run_server(seed))
        })
        .await??;
    }
    Ok(())
}
