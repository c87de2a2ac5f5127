//! Tracing setup: one compact fmt layer written to both stdout and an append-only log file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
    Registry,
};

/// Used when `RUST_LOG` is unset or unparsable. The HTTP stack is kept at warn so per-wallet
/// lookups do not drown the conversation steps.
pub const DEFAULT_DIRECTIVES: &str = "info,hyper=warn,hyper_util=warn,reqwest=warn";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVES`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Opens `path` for appending, creating it and any missing parent directories.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber. Load `.env` first so `RUST_LOG` from it is honoured.
pub fn init_tracing(log_file_path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = log_file_path.as_ref();
    let file = Arc::new(open_log_file(path)?);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(false)
        .with_target(true)
        .with_writer(io::stdout.and(file));

    Registry::default()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    tracing::debug!(log_file = %path.display(), "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_parent_dirs_and_appends() {
        let dir = std::env::temp_dir().join(format!("dbot-core-log-{}", std::process::id()));
        let path = dir.join("nested").join("bot.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_directives_parse() {
        let filter = EnvFilter::try_new(DEFAULT_DIRECTIVES).unwrap();
        assert!(filter.to_string().contains("reqwest=warn"));
    }
}
