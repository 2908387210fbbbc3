//! Diagnostics and transcript logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to
//! `<log_dir>/bac-tutor.log`. When transcripts are enabled, every tutor
//! response is also appended to a daily per-tab file named
//! `<tab>_<date>.log` in the same directory.

use crate::app::state::TranscriptEntry;
use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// configured level. Does nothing when logging is disabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let log_dir = config.log_dir();
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join("bac-tutor.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(())
}

/// Appends tutor responses to per-tab daily files.
///
/// File handles are cached for the lifetime of the logger.
pub struct TranscriptLogger {
    enabled: bool,
    log_dir: PathBuf,
    file_handles: HashMap<String, fs::File>,
}

impl TranscriptLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled && config.transcripts,
            log_dir: config.log_dir(),
            file_handles: HashMap::new(),
        }
    }

    pub fn log_entry(&mut self, entry: &TranscriptEntry) {
        if !self.enabled {
            return;
        }
        // Dated by when the response arrived, not when it is flushed.
        let date = entry.timestamp.format("%Y-%m-%d");
        let filename = format!("{}_{}.log", entry.tab.slug(), date);

        if !self.file_handles.contains_key(&filename) {
            let filepath = self.log_dir.join(&filename);
            let opened = fs::create_dir_all(&self.log_dir).and_then(|_| {
                OpenOptions::new().create(true).append(true).open(&filepath)
            });
            match opened {
                Ok(file) => {
                    self.file_handles.insert(filename.clone(), file);
                }
                Err(e) => {
                    warn!(path = %filepath.display(), error = %e, "Cannot open transcript file");
                    return;
                }
            }
        }

        if let Some(handle) = self.file_handles.get_mut(&filename) {
            let written = writeln!(
                handle,
                "[{}] [{}]\n{}\n",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.subject.label(),
                entry.text.trim_end()
            );
            if let Err(e) = written {
                warn!(error = %e, "Failed to write transcript entry");
            }
        }
    }
}
