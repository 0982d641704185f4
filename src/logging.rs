use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set to a path prefix to write the CLI's trace output to a file.
pub const LOG_ENV: &str = "FORUM_CLIENT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber for the `forum-client` binary.
///
/// Verbosity follows `RUST_LOG`. Output goes to stderr unless [`LOG_ENV`]
/// is set, in which case each run writes its own file next to that prefix.
/// If the file cannot be opened the run keeps logging to stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let file = std::env::var_os(LOG_ENV).and_then(|prefix| {
        let path = log_file_path(Path::new(&prefix), std::process::id());
        match File::create(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("forum-client: cannot write log to {}: {e}", path.display());
                None
            }
        }
    });

    match file {
        Some(file) => registry
            .with(fmt::layer().with_writer(file).with_ansi(false))
            .init(),
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

/// `{prefix}.{unix seconds}.{pid}`
fn log_file_path(prefix: &Path, pid: u32) -> PathBuf {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let mut name = prefix.as_os_str().to_owned();
    name.push(format!(".{started}.{pid}"));
    PathBuf::from(name)
}
