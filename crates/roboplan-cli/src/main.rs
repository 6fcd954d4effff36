use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::context::Context;

#[derive(Parser)]
#[command(name = "roboplan")]
#[command(about = "ROBOPLAN CLI - floor plans, paths and task sequences for a robot fleet", long_about = None)]
struct Cli {
    /// Facility snapshot (defaults to ~/.config/roboplan/facility.toml)
    #[arg(long, global = true)]
    facility: Option<PathBuf>,

    /// Solver settings (defaults to ~/.config/roboplan/solver.toml)
    #[arg(long, global = true)]
    solver_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a floor into solver facts
    FloorPlan {
        floor_id: String,
        /// Print the occupancy grid instead of the facts
        #[arg(long)]
        grid: bool,
    },
    /// Find the cheapest route between two rooms
    Path {
        origin_floor: String,
        origin_room: String,
        destination_floor: String,
        destination_room: String,
    },
    /// Sequence every robot's accepted tasks
    Sequence {
        /// `genetic` or `permutation`
        #[arg(long, default_value = "genetic")]
        algorithm: String,
    },
    /// Accept a requested task and assign it to a robot
    Accept { task_code: u32, robisep_id: String },
    /// Refuse a requested task
    Refuse { task_code: u32 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let context = Context::load(cli.facility, cli.solver_config).await?;

    match cli.command {
        Commands::FloorPlan { floor_id, grid } => {
            commands::floor_plan::run(&context, &floor_id, grid).await?
        }
        Commands::Path {
            origin_floor,
            origin_room,
            destination_floor,
            destination_room,
        } => {
            commands::path::run(
                &context,
                &origin_floor,
                &origin_room,
                &destination_floor,
                &destination_room,
            )
            .await?
        }
        Commands::Sequence { algorithm } => commands::sequence::run(&context, &algorithm).await?,
        Commands::Accept {
            task_code,
            robisep_id,
        } => commands::task::accept(&context, task_code, &robisep_id).await?,
        Commands::Refuse { task_code } => commands::task::refuse(&context, task_code).await?,
    }

    Ok(())
}
