use clap::Parser;
use ferryman::cli::{self, Cli, Commands};
use tracing::error;

fn main() {
    let cli = Cli::parse();
    cli.logging().init();

    let result = match &cli.command {
        Commands::Cross(args) => cli::cross::execute(args),
        Commands::Knapsack(args) => cli::knapsack::execute(args),
    };

    if let Err(e) = result {
        error!(error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
