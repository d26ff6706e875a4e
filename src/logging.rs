//! Session logging persistence layer
//!
//! Writes the system log to disk without blocking the UI thread. Logs
//! are stored in XDG_DATA_HOME/cardbox/logs/YYYY-MM-DD.log, one file per
//! day.

use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::thread;

/// A log entry to be written to disk
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub line: String,
}

/// Logger persists session log lines via a background thread
pub struct Logger {
    /// Channel to send log entries to the background thread
    tx: Sender<LogEntry>,
}

impl Logger {
    /// Create a new logger and spawn the background thread for async I/O
    pub fn new() -> Result<Self, String> {
        let log_dir = get_log_directory()?;

        fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;

        let (tx, rx) = unbounded::<LogEntry>();

        thread::spawn(move || {
            run_logger_thread(rx, log_dir);
        });

        Ok(Self { tx })
    }

    /// Log a line (non-blocking, queued for background writing)
    pub fn log(&self, entry: LogEntry) {
        // If send fails, the logger thread has stopped - silently ignore
        let _ = self.tx.send(entry);
    }
}

/// Background thread that handles all file I/O
fn run_logger_thread(rx: Receiver<LogEntry>, log_dir: PathBuf) {
    let mut writer: Option<(String, BufWriter<File>)> = None;

    while let Ok(entry) = rx.recv() {
        if let Err(e) = write_log_entry(&mut writer, &log_dir, &entry) {
            eprintln!("Logger error: {}", e);
        }
    }

    if let Some((_, mut w)) = writer.take() {
        let _ = w.flush();
    }
}

/// Write a single entry to the current day's file, rotating at midnight
fn write_log_entry(
    writer: &mut Option<(String, BufWriter<File>)>,
    log_dir: &std::path::Path,
    entry: &LogEntry,
) -> Result<(), String> {
    let date = Local::now().format("%Y-%m-%d").to_string();

    let stale = writer.as_ref().map(|(d, _)| d != &date).unwrap_or(true);
    if stale {
        if let Some((_, mut old)) = writer.take() {
            let _ = old.flush();
        }
        let path = log_dir.join(format!("{}.log", date));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| format!("Failed to open log file: {}", e))?;
        *writer = Some((date, BufWriter::new(file)));
    }

    let (_, w) = writer.as_mut().expect("writer opened above");
    writeln!(w, "[{}] {}", entry.timestamp, entry.line)
        .map_err(|e| format!("Failed to write log entry: {}", e))?;
    w.flush().map_err(|e| format!("Failed to flush log: {}", e))?;

    Ok(())
}

/// Get the platform-specific log directory using XDG conventions
fn get_log_directory() -> Result<PathBuf, String> {
    let base = directories::BaseDirs::new().ok_or("Failed to determine home directory")?;
    let data_dir = base.data_dir();
    Ok(data_dir.join("cardbox").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_exists() {
        let result = get_log_directory();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().contains("cardbox"));
    }
}
