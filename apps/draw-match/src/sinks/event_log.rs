//! Game log sinks.
//!
//! The engine only ever calls [`EventLog::record`]; formatting and the
//! destination belong to the sink.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use parking_lot::Mutex;
use tracing::warn;

use crate::config::LogFormat;
use crate::domain::GameEvent;
use crate::error::AppError;

pub trait EventLog: Send + Sync {
    fn record(&self, event: &GameEvent);
}

/// Line-oriented log over any writer, flushed after every event.
pub struct WriterLog {
    format: LogFormat,
    out: Mutex<Box<dyn Write + Send>>,
}

impl WriterLog {
    /// Create (or truncate) the log file at `path`.
    pub fn create(path: &Path, format: LogFormat) -> Result<Self, AppError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| AppError::io(format!("cannot open log {}: {e}", path.display())))?;
        Ok(Self::from_writer(BufWriter::new(file), format))
    }

    pub fn from_writer(writer: impl Write + Send + 'static, format: LogFormat) -> Self {
        Self {
            format,
            out: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: &GameEvent) -> io::Result<()> {
        let mut out = self.out.lock();
        match self.format {
            LogFormat::Text => writeln!(out, "{event}")?,
            LogFormat::Jsonl => {
                let json = serde_json::to_string(event)?;
                writeln!(out, "{json}")?;
            }
        }
        out.flush()
    }
}

impl EventLog for WriterLog {
    fn record(&self, event: &GameEvent) {
        if let Err(e) = self.write_event(event) {
            warn!(error = %e, "failed to write game event");
        }
    }
}

/// Keeps every event in memory, in record order.
#[derive(Default)]
pub struct MemoryLog {
    events: Mutex<Vec<GameEvent>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().clone()
    }
}

impl EventLog for MemoryLog {
    fn record(&self, event: &GameEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Drops every event.
pub struct NullLog;

impl EventLog for NullLog {
    fn record(&self, _event: &GameEvent) {}
}
