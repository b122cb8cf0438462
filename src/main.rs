// Entrypoint for the `movie` command.
// - Keeps `main` small: load `.env`, parse arguments, set up logging and
//   hand the rest to `Cli::run`.
// - Returns `anyhow::Result` so startup failures surface with context.

use clap::Parser;
use movie_cli::{cli::Cli, logging};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // A missing `.env` is fine; the key may come from the real environment.
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    Ok(cli.run())
}
