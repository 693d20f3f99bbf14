use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides where the log file goes.
pub const LOG_FILE_ENV: &str = "ORDENA_LOG_FILE";

const DEFAULT_FILTER: &str = "warn,ordena=info";

/// Install the global subscriber. Logs go to a file only; the terminal belongs
/// to the TUI. `RUST_LOG` replaces the default filter.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let candidates = log_file_candidates(
        std::env::var_os(LOG_FILE_ENV).map(PathBuf::from),
        dirs::data_dir(),
    );
    let mut skipped = Vec::new();
    let Some((path, file)) = open_log_file(candidates, &mut skipped) else {
        // Nowhere to write: drop logs rather than draw over the UI.
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();
    tracing::info!(path = %path.display(), "logging to file");
    for (candidate, err) in skipped {
        tracing::warn!(path = %candidate.display(), %err, "log location unusable");
    }
}

/// Where to look for a writable log file, most preferred first.
fn log_file_candidates(explicit: Option<PathBuf>, data_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = explicit.into_iter().collect();
    if let Some(data_dir) = data_dir {
        candidates.push(data_dir.join("ordena").join("logs").join("ordena.log"));
    }
    candidates.push(PathBuf::from(".ordena").join("logs").join("ordena.log"));
    candidates
}

/// Open the first candidate that works. Every candidate passed over is
/// recorded in `skipped` along with the reason.
fn open_log_file(
    candidates: Vec<PathBuf>,
    skipped: &mut Vec<(PathBuf, io::Error)>,
) -> Option<(PathBuf, File)> {
    for candidate in candidates {
        match append_to(&candidate) {
            Ok(file) => return Some((candidate, file)),
            Err(err) => skipped.push((candidate, err)),
        }
    }
    None
}

fn append_to(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
