use asakit_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // As early as possible; falls back to stderr on its own.
    logging::init();

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("asakit error: {:#}", err);
        std::process::exit(1);
    }
}
