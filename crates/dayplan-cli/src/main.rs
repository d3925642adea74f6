use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayplan-cli", version, about = "Dayplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate today's schedule from a JSON request
    Schedule {
        /// Read the request from a file instead of stdin
        #[arg(long)]
        input: Option<std::path::PathBuf>,
    },
    /// Print the computed free slots for a request
    Slots {
        /// Read the request from a file instead of stdin
        #[arg(long)]
        input: Option<std::path::PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Schedule { input } => commands::schedule::run(input),
        Commands::Slots { input } => commands::slots::run(input),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
