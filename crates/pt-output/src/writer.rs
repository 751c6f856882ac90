//! The `StepWriter` trait implemented by all export backends.

use pt_search::{Step, StepSequence};

use crate::OutputResult;

/// Trait implemented by the CSV and JSON writers.
pub trait StepWriter {
    /// Write the step at position `index` of its sequence.
    ///
    /// Fails with [`OutputError::Finished`](crate::OutputError::Finished)
    /// once [`finish`](Self::finish) has run.
    fn write_step(&mut self, index: usize, step: &Step) -> OutputResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every step of `steps` in order, then finish the writer.
pub fn write_sequence<W: StepWriter + ?Sized>(writer: &mut W, steps: &StepSequence) -> OutputResult<()> {
    for (index, step) in steps.iter().enumerate() {
        writer.write_step(index, step)?;
    }
    writer.finish()
}
