use clap::Parser;
use dataproc::cli::{Cli, CliResult, Commands, pipes_command, run_command, scan_command};
use dataproc::logging;
use tracing::error;

fn main() {
    let args = Cli::parse();

    if let Err(e) = logging::init(args.verbose, args.log_file.as_deref()) {
        eprintln!("Failed to create log file: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(args.cmd) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cmd: Commands) -> CliResult<()> {
    match cmd {
        Commands::Run {
            manipulation,
            output,
            yes,
        } => run_command(&manipulation, output.as_deref(), yes),
        Commands::Scan {
            root,
            whitelist,
            output,
            yes,
        } => scan_command(&root, whitelist, output.as_deref(), yes),
        Commands::Pipes => pipes_command(),
    }
}
