use clap::Parser;
use colored::Colorize;
use inventory_subnet_summary::args::Args;
use inventory_subnet_summary::{logging, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = logging::init(&args.log, args.log_level.into()) {
        eprintln!("{} {e}", "ERROR".on_red());
        return ExitCode::FAILURE;
    }
    log::info!("#Start main() config={}", args.config.display());

    let stdout = std::io::stdout();
    match run(&args.config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR".on_red());
            ExitCode::FAILURE
        }
    }
}
