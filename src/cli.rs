use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphlib")]
#[command(about = "Order and prune dependency graphs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a manifest for dependency cycles
    Check {
        /// Path to the dependency manifest
        file: PathBuf,
    },

    /// Print the topological order
    Order {
        /// Path to the dependency manifest
        file: PathBuf,
        /// Print one layer of independent nodes per line
        #[arg(long)]
        layers: bool,
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the order of the subgraph needed to build the targets
    Prune {
        /// Path to the dependency manifest
        file: PathBuf,
        /// Node to keep along with everything it depends on
        #[arg(long = "target", required = true)]
        targets: Vec<String>,
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the edges of the graph, or of its pruned subgraph
    Edges {
        /// Path to the dependency manifest
        file: PathBuf,
        /// Prune to these nodes first
        #[arg(long = "target")]
        targets: Vec<String>,
    },
}
