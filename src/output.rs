use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::{Record, COLUMNS};

/// Appends one CSV row per record. The header goes out once per opened sink, so a file
/// appended to by several runs carries one header per run.
pub struct RecordSink<W: Write> {
    writer: csv::Writer<W>,
}

impl RecordSink<File> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        Self::from_writer(file)
    }
}

impl<W: Write> RecordSink<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer.write_record(COLUMNS)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Write and flush a row, so rows already emitted survive a later fatal error.
    pub fn append(&mut self, record: &Record) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }
}
