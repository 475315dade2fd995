//! Pipeline
//!
//! parse → resolve → recipe → text edits, per file and over directory trees.
//!
//! - `processor`: one source text (`process_source`)
//! - `batch`: files and directories, in parallel (`process_paths`)
//! - `report`: serialisable per-file and total results

pub mod batch;
pub mod processor;
pub mod report;

pub use batch::{collect_files, process_paths, write_changes};
pub use processor::{process_source, ConvertedMethod, FileOutcome};
pub use report::{BatchReport, FileReport, FileStatus, Totals};
