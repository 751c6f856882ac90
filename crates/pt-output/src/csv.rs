//! CSV output backend.
//!
//! One row per node per step, in step order and then node-id order:
//!
//! ```text
//! step,kind,node,status,distance,previous
//! 0,initial,1,unvisited,0,
//! 0,initial,2,unvisited,inf,
//! ```
//!
//! Unreached distances are written as `inf`; a missing predecessor is an
//! empty field.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use pt_search::Step;

use crate::row::StepNodeRow;
use crate::writer::StepWriter;
use crate::{OutputError, OutputResult};

const HEADER: [&str; 6] = ["step", "kind", "node", "status", "distance", "previous"];

/// Writes a step sequence as flat CSV rows.
pub struct CsvStepWriter<W: Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvStepWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvStepWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(sink);
        inner.write_record(HEADER)?;
        Ok(Self { inner, finished: false })
    }

    /// Write a single pre-built row.
    pub fn write_row(&mut self, row: &StepNodeRow) -> OutputResult<()> {
        let distance = if row.distance.is_finite() {
            row.distance.to_string()
        } else {
            "inf".to_owned()
        };
        let previous = row.previous.map(|p| p.get().to_string()).unwrap_or_default();
        self.inner.write_record(&[
            row.step.to_string(),
            row.kind.as_str().to_owned(),
            row.node.get().to_string(),
            row.status.as_str().to_owned(),
            distance,
            previous,
        ])?;
        Ok(())
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.inner.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> StepWriter for CsvStepWriter<W> {
    fn write_step(&mut self, index: usize, step: &Step) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for row in StepNodeRow::from_step(index, step) {
            self.write_row(&row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
