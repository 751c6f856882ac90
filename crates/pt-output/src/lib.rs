//! `pt-output`: export writers for step sequences.
//!
//! Two backends are provided:
//!
//! | Writer           | Format                                                    |
//! |------------------|-----------------------------------------------------------|
//! | `CsvStepWriter`  | one row per (step, node): `step,kind,node,status,distance,previous` |
//! | `JsonStepWriter` | a JSON array of step objects                              |
//!
//! Both implement [`StepWriter`]; [`write_sequence`] drives either one over a
//! whole [`StepSequence`](pt_search::StepSequence).
//!
//! # Usage
//!
//! ```rust,ignore
//! use pt_output::{CsvStepWriter, write_sequence};
//!
//! let mut w = CsvStepWriter::create(Path::new("trace.csv"))?;
//! write_sequence(&mut w, &steps)?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;


pub use self::csv::CsvStepWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonStepWriter;
pub use row::StepNodeRow;
pub use writer::{StepWriter, write_sequence};
