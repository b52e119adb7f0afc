//! Output writer for simulation results.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::simulator::GameRecord;

pub struct OutputWriter {
    jsonl_writer: Option<Box<dyn Write + Send>>,
    jsonl_path: Option<PathBuf>,
}

impl OutputWriter {
    /// Writer for `path`, or a writer that drops everything when `None`.
    pub fn new(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let Some(path) = path else {
            return Ok(Self {
                jsonl_writer: None,
                jsonl_path: None,
            });
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self {
            jsonl_writer: Some(Box::new(BufWriter::new(file))),
            jsonl_path: Some(path.to_path_buf()),
        })
    }

    pub fn write_game(&mut self, record: &GameRecord) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(writer) = self.jsonl_writer.as_mut() {
            serde_json::to_writer(&mut *writer, record)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.jsonl_path.as_ref()
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(writer) = self.jsonl_writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}
