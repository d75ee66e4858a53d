//! Tracing setup for the two run modes.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file for interactive mode.
pub const LOG_ENV_VAR: &str = "TEXTSUM_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Full-screen UI: stderr belongs to the terminal, so only a file is
    /// ever written, and only when `TEXTSUM_LOG` is set.
    Interactive,
    /// Summarize once: warnings and errors go to stderr.
    OneShot,
}

impl LogMode {
    /// Filter used when `RUST_LOG` is unset or invalid.
    fn default_directive(self) -> &'static str {
        match self {
            LogMode::Interactive => "info",
            LogMode::OneShot => "warn",
        }
    }
}

/// Install the global subscriber for `mode`. Call once, from `main`.
pub fn init_tracing(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(mode.default_directive()));

    match mode {
        LogMode::OneShot => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(UtcTime::rfc_3339())
                .init();
        }
        LogMode::Interactive => {
            let Some(base) = std::env::var_os(LOG_ENV_VAR) else {
                return;
            };
            let path = session_log_path(&base, SystemTime::now(), std::process::id());

            let file = match File::create(&path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("Warning: cannot write log file {}: {}", path.display(), err);
                    return;
                }
            };

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
        }
    }
}

/// `{base}.{unix_seconds}.{pid}`, so concurrent sessions never share a file.
fn session_log_path(base: &OsStr, started: SystemTime, pid: u32) -> PathBuf {
    let seconds = started
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();

    let mut name = OsString::from(base);
    name.push(format!(".{}.{}", seconds, pid));
    PathBuf::from(name)
}
