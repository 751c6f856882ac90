//! JSON output backend.
//!
//! Streams the sequence as a single JSON array of step objects.  Distances
//! that are still infinite serialize as `null`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use pt_search::Step;

use crate::writer::StepWriter;
use crate::{OutputError, OutputResult};

/// Writes a step sequence as one JSON array.
pub struct JsonStepWriter<W: Write> {
    sink:     W,
    written:  usize,
    pretty:   bool,
    finished: bool,
}

impl JsonStepWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonStepWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, written: 0, pretty: false, finished: false }
    }

    /// Indent each step object.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Close the array and hand back the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        Ok(self.sink)
    }
}

impl<W: Write> StepWriter for JsonStepWriter<W> {
    fn write_step(&mut self, _index: usize, step: &Step) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        let sep: &[u8] = if self.written == 0 { b"[" } else { b"," };
        self.sink.write_all(sep)?;
        if self.pretty {
            self.sink.write_all(b"\n")?;
            serde_json::to_writer_pretty(&mut self.sink, step)?;
        } else {
            serde_json::to_writer(&mut self.sink, step)?;
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if self.written == 0 {
            self.sink.write_all(b"[")?;
        }
        if self.pretty {
            self.sink.write_all(b"\n")?;
        }
        self.sink.write_all(b"]")?;
        self.sink.flush()?;
        Ok(())
    }
}
