// Library root
// -----------
// This crate exposes a small library surface for the `movie` CLI. The
// binary (`main.rs`) only parses arguments and wires these modules together.
//
// Module responsibilities:
// - `config`: API key and endpoint, built once at startup.
// - `api`: Encapsulates the HTTP call to OMDb and the response model.
// - `lookup`: The one pipeline: fetch, print, optionally save.
// - `plot_file`: Filename and layout of the saved plot.
// - `ui`: Console rendering (summary, save notice, colored errors).
// - `error`: Typed failures shared by every step.
// - `cli`: Argument parsing and the process driver.
// - `logging`: Diagnostic logging to stderr.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod plot_file;
pub mod ui;

pub use error::LookupError;
pub use lookup::lookup_and_report;
