use clap::Parser;

use sloc_audit::cli::{Cli, Commands};
use sloc_audit::commands::{run_check, run_hotspots};
use sloc_audit::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Hotspots(args) => run_hotspots(args, &cli),
    };

    std::process::exit(exit_code);
}
