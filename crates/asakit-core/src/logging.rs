//! Structured logging for asakit.
//!
//! Records go to `~/.local/state/asakit/asakit.log` (append, no ANSI). When
//! the state dir cannot be used, [`init`] installs a stderr subscriber instead
//! and reports that through [`LogTarget::Stderr`]; it never fails.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "asakit.log";
const DEFAULT_FILTER: &str = "info,asakit=debug";

/// Where [`init`] sent the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    /// The log file could not be opened; holds the reason.
    Stderr(String),
}

/// One writer per record: a clone of the log file handle, or stderr if cloning fails.
enum RecordWriter {
    File(fs::File),
    Stderr,
}

impl io::Write for RecordWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            RecordWriter::File(f) => f.write(buf),
            RecordWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            RecordWriter::File(f) => f.flush(),
            RecordWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = RecordWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(RecordWriter::File)
            .unwrap_or(RecordWriter::Stderr)
    }
}

/// `RUST_LOG` if set and parseable, otherwise `info,asakit=debug`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file under `~/.local/state/asakit/`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("asakit")?;
    Ok(xdg_dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating its directory first.
fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

fn install(writer: BoxMakeWriter) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

/// Installs the global subscriber. Call once, as early as possible.
pub fn init() -> LogTarget {
    let opened = log_file_path().and_then(|path| open_log_file(&path).map(|file| (path, file)));
    match opened {
        Ok((path, file)) => {
            install(BoxMakeWriter::new(LogFile(file)));
            tracing::info!("asakit logging initialized at {}", path.display());
            LogTarget::File(path)
        }
        Err(e) => {
            install(BoxMakeWriter::new(io::stderr));
            tracing::warn!("log file unavailable, logging to stderr: {:#}", e);
            LogTarget::Stderr(format!("{:#}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state/asakit").join(LOG_FILE_NAME);
        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn open_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "earlier\n").unwrap();

        let writer = LogFile(open_log_file(&path).unwrap());
        io::Write::write_all(&mut writer.make_writer(), b"later\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\nlater\n");
    }

    #[test]
    fn open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let err = open_log_file(&blocker.join(LOG_FILE_NAME)).unwrap_err();
        assert!(format!("{:#}", err).contains("create log dir"));
    }

    #[test]
    fn records_land_in_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
            .with_writer(LogFile(open_log_file(&path).unwrap()))
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(unit_name = "PRES", "validated token configuration");
            tracing::trace!("dropped by the default filter");
        });

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("validated token configuration"));
        assert!(text.contains("PRES"));
        assert!(!text.contains("dropped by the default filter"));
    }
}
