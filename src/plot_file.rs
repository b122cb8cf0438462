//! Persisting a movie's plot to `<Title_with_underscores>_plot.txt`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::api::Movie;
use crate::error::LookupError;

/// File name for a title: spaces become underscores, nothing else changes.
pub fn plot_filename(title: &str) -> String {
    format!("{}_plot.txt", title.replace(' ', "_"))
}

/// Text written to the plot file.
pub fn plot_contents(movie: &Movie) -> String {
    format!("{} ({})\n\n{}", movie.title, movie.year, movie.plot)
}

/// Write the plot file into `dir`, overwriting any existing file. An empty
/// `dir` means the current working directory.
pub fn save_plot(dir: &Path, movie: &Movie) -> Result<PathBuf, LookupError> {
    let path = dir.join(plot_filename(&movie.title));
    std::fs::write(&path, plot_contents(movie)).map_err(|source| LookupError::Save {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "plot saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.into(),
            year: "1999".into(),
            genre: "N/A".into(),
            imdb_rating: "N/A".into(),
            plot: "Something happens.".into(),
        }
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(plot_filename("The Matrix"), "The_Matrix_plot.txt");
        assert_eq!(plot_filename("Alien"), "Alien_plot.txt");
    }

    #[test]
    fn contents_have_blank_line_and_no_trailing_newline() {
        assert_eq!(
            plot_contents(&movie("The Matrix")),
            "The Matrix (1999)\n\nSomething happens."
        );
    }

    #[test]
    fn empty_dir_resolves_to_bare_filename() {
        let path = Path::new("").join(plot_filename("Heat"));
        assert_eq!(path, PathBuf::from("Heat_plot.txt"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("The_Matrix_plot.txt");
        std::fs::write(&existing, "old content that is longer than the new one").unwrap();

        let path = save_plot(dir.path(), &movie("The Matrix")).unwrap();
        assert_eq!(path, existing);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "The Matrix (1999)\n\nSomething happens."
        );
    }

    #[test]
    fn unwritable_directory_is_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = save_plot(&missing, &movie("Heat")).unwrap_err();
        assert!(matches!(err, LookupError::Save { .. }));
    }
}
