//! Command-line surface: `movie <TITLE> [--year YEAR] [--save]`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::debug;

use crate::api::MovieQuery;
use crate::config::Config;
use crate::error::LookupError;
use crate::lookup::lookup_and_report;
use crate::ui::{self, Console};

/// Search for a movie and optionally save its plot.
#[derive(Debug, Parser)]
#[command(name = "movie", version)]
pub struct Cli {
    /// Title of the movie
    pub title: String,

    /// Release year of the movie
    #[arg(short, long)]
    pub year: Option<String>,

    /// Save the movie plot to a file
    #[arg(short, long)]
    pub save: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn query(&self) -> MovieQuery {
        MovieQuery::new(self.title.clone(), self.year.clone())
    }

    /// Run against the real environment, stdout/stderr and the current
    /// directory.
    pub fn run(&self) -> ExitCode {
        let result = self.run_with(
            Config::from_env(),
            Path::new(""),
            &mut Console::stdout(),
            &mut Console::stderr(),
        );
        match result {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        }
    }

    /// Drive one invocation. A configuration error is reported without
    /// building a client or touching the network. The colored message on
    /// `err_out` is the only user-facing report of a failure.
    pub fn run_with<W: Write, E: Write>(
        &self,
        config: Result<Config, LookupError>,
        save_dir: &Path,
        out: &mut Console<W>,
        err_out: &mut Console<E>,
    ) -> Result<Option<PathBuf>, LookupError> {
        let result = config
            .and_then(|config| lookup_and_report(&config, &self.query(), self.save, save_dir, out));
        if let Err(err) = &result {
            debug!(error = %err, "lookup failed");
            let _ = ui::print_error(err_out, err);
        }
        result
    }
}
