//! The lookup pipeline: fetch one movie, print it, optionally save the plot.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::api::{MovieQuery, OmdbClient};
use crate::config::Config;
use crate::error::LookupError;
use crate::plot_file;
use crate::ui::{self, Console};

/// Run one lookup and write the summary to `out`.
///
/// On success returns the path of the saved plot file, or `None` when
/// `save` is false. Stops at the first failing step; the caller renders
/// the error.
pub fn lookup_and_report<W: Write>(
    config: &Config,
    query: &MovieQuery,
    save: bool,
    save_dir: &Path,
    out: &mut Console<W>,
) -> Result<Option<PathBuf>, LookupError> {
    let client = OmdbClient::new(config)?;

    let spinner = ui::spinner("Searching OMDb...");
    let result = client.fetch_movie(query);
    spinner.finish_and_clear();
    let movie = result?;

    // Console write errors are ignored.
    let _ = ui::print_movie(out, &movie);

    if !save {
        return Ok(None);
    }

    let path = plot_file::save_plot(save_dir, &movie)?;
    info!(path = %path.display(), "plot written");
    let _ = ui::print_saved(out, &path);
    Ok(Some(path))
}
