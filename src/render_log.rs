//! Run log for reproducibility
//!
//! Every CLI run appends a record of its parameters and results to a JSON
//! array on disk, so any rendered image or sequence can be regenerated exactly.

use crate::render::{FrameParams, Resolution};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write as _};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Complete record of one CLI run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRecord {
    /// Timestamp of the run
    pub timestamp: String,

    /// Subcommand that produced the output ("frame" or "animate")
    pub command: String,

    /// Output file or directory
    pub output: String,

    pub resolution: Resolution,
    pub workers: usize,

    /// Parameters of the first rendered frame
    pub start_params: FrameParams,

    pub speed: f32,
    pub rainbow: bool,
    pub frames: usize,

    /// Depth-test wins summed over all frames
    pub total_committed: usize,

    pub elapsed_ms: u64,
}

impl RenderRecord {
    /// Create a new record with the current timestamp
    pub fn new(command: &str, output: String) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            command: command.to_string(),
            output,
            resolution: Resolution::default(),
            workers: 0,
            start_params: FrameParams::default(),
            speed: 0.0,
            rainbow: false,
            frames: 0,
            total_committed: 0,
            elapsed_ms: 0,
        }
    }
}

/// JSON run log guarded by a sibling `<log>.lock` file.
///
/// Appends are read-modify-write under an exclusive `File::lock`, so runs
/// started in parallel against the same log keep every record.
pub struct RenderLogger {
    log_path: PathBuf,
    lock_path: PathBuf,
}

impl RenderLogger {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        let log_path = log_path.into();
        let mut lock_path = log_path.clone().into_os_string();
        lock_path.push(".lock");
        Self { log_path, lock_path: PathBuf::from(lock_path) }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Append `record` and return how many records the log now holds.
    pub fn append(&self, record: &RenderRecord) -> io::Result<usize> {
        let lock = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.lock_path)?;
        lock.lock()?;

        let mut records = self.load()?;
        records.push(record.clone());

        // must reach disk before `lock` drops
        let mut writer = BufWriter::new(File::create(&self.log_path)?);
        serde_json::to_writer_pretty(&mut writer, &records).map_err(io::Error::other)?;
        writer.flush()?;
        Ok(records.len())
    }

    /// Read every record. A missing or blank log is empty. A log that no
    /// longer parses is moved aside to `<log>.corrupt.<unix time>` and
    /// treated as empty so the next append starts a fresh array.
    pub fn load(&self) -> io::Result<Vec<RenderRecord>> {
        let contents = match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(e) => {
                let backup = self.move_aside()?;
                warn!("Unreadable run log ({e}); moved to {}", backup.display());
                Ok(Vec::new())
            }
        }
    }

    fn move_aside(&self) -> io::Result<PathBuf> {
        let mut backup = self.log_path.clone().into_os_string();
        backup.push(format!(".corrupt.{}", chrono::Utc::now().timestamp()));
        let backup = PathBuf::from(backup);
        fs::rename(&self.log_path, &backup)?;
        Ok(backup)
    }
}
