// UI layer: renders the lookup result and errors to the terminal using
// `crossterm` styling. Output goes through a `Console`, so the binary can
// pass stdout/stderr and tests can pass a buffer. Styling is only applied
// when the console is a terminal.

use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;
use std::time::Duration;

use crossterm::style::{StyledContent, Stylize};
use crossterm::tty::IsTty;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::Movie;
use crate::error::LookupError;

/// A writer plus whether ANSI styling should be emitted on it.
pub struct Console<W> {
    pub writer: W,
    color: bool,
}

impl<W: Write> Console<W> {
    /// Never styled. Used for buffers and redirected output.
    pub fn plain(writer: W) -> Self {
        Console {
            writer,
            color: false,
        }
    }

    pub fn styled(writer: W) -> Self {
        Console {
            writer,
            color: true,
        }
    }

    fn line(&mut self, text: String, style: fn(String) -> StyledContent<String>) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}", style(text))
        } else {
            writeln!(self.writer, "{}", text)
        }
    }
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let color = stdout.is_tty();
        Console {
            writer: stdout,
            color,
        }
    }
}

impl Console<Stderr> {
    pub fn stderr() -> Self {
        let stderr = io::stderr();
        let color = stderr.is_tty();
        Console {
            writer: stderr,
            color,
        }
    }
}

/// Print the multi-line movie summary.
pub fn print_movie<W: Write>(out: &mut Console<W>, movie: &Movie) -> io::Result<()> {
    writeln!(out.writer)?;
    out.line(format!("🎬 {} ({})", movie.title, movie.year), |s| s.cyan().bold())?;
    writeln!(out.writer, "Genre: {}", movie.genre)?;
    writeln!(out.writer, "IMDb: {}", movie.imdb_rating)?;
    writeln!(out.writer)?;
    writeln!(out.writer, "Plot:")?;
    writeln!(out.writer, "{}", movie.plot)
}

/// Tell the user where the plot went.
pub fn print_saved<W: Write>(out: &mut Console<W>, path: &Path) -> io::Result<()> {
    writeln!(out.writer)?;
    out.line(format!("Plot saved to {}", path.display()), |s| s.green())
}

/// Print a failure in red. HTTP errors get a second, yellow line with the
/// raw response body.
pub fn print_error<W: Write>(err_out: &mut Console<W>, err: &LookupError) -> io::Result<()> {
    err_out.line(err.to_string(), |s| s.red())?;
    if let LookupError::Http { body, .. } = err {
        err_out.line(format!("Response content: {}", body), |s| s.yellow())?;
    }
    Ok(())
}

/// Spinner shown on stderr while the request is in flight. indicatif hides
/// it automatically when stderr is not a terminal.
pub fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
