use clap::Parser;
use graphlib::cli::{Cli, Commands};
use graphlib::cli_handlers;
use std::process;

fn main() {
    // Diagnostics go to stderr so stdout stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file } => cli_handlers::handle_check(&file),
        Commands::Order { file, layers, json } => cli_handlers::handle_order(&file, layers, json),
        Commands::Prune {
            file,
            targets,
            json,
        } => cli_handlers::handle_prune(&file, &targets, json),
        Commands::Edges { file, targets } => cli_handlers::handle_edges(&file, &targets),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
