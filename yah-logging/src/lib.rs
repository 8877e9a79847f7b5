//! yah-logging: append-only NDJSON game-event logs.
//!
//! One JSON object per line, written as games run. Readers are expected to
//! tolerate a truncated final line, so an interrupted run loses at most one
//! event.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event record schema version.
pub const LOG_SCHEMA_VERSION: u32 = 1;

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// One committed turn: the final hand and the category it was scored under.
#[derive(Debug, Clone, Serialize)]
pub struct TurnEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub schema_version: u32,

    pub game_id: u64,
    pub round: u32,
    pub seat: u32,
    pub player: String,

    pub dice: [u8; 5],
    pub rerolls_used: u8,
    pub category: String,
    pub score: i32,
}

/// End-of-game summary: totals, winners, and upper-bonus flags per seat.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummaryEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub schema_version: u32,

    pub game_id: u64,
    pub rounds: u32,
    pub players: Vec<String>,
    pub totals: Vec<i32>,
    pub winners: Vec<String>,
    pub upper_bonus: Vec<bool>,
}

#[derive(Debug)]
pub enum EventLogError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for EventLogError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for EventLogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Append-only NDJSON event log.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct EventLog {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl EventLog {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, EventLogError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, EventLogError> {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .write(true)
            .open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), EventLogError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), EventLogError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}
