//! error taxonomy of the crate.
//!
//! Extraction and parsing errors abort the whole run, there is no retry :
//! inputs are immutable files so retrying reproduces the same failure.
//! Zero matches between the two reports is not an error, the binary reports it
//! as an informational message.

use std::path::PathBuf;

use thiserror::Error;

/// All failures carry the offending file path so the binary can print them verbatim.
#[derive(Error, Debug)]
pub enum BlastError {
    /// report file missing, unreadable, xml unparseable or a hit element structurally incomplete
    #[error("could not read blast report {path:?} : {reason}")]
    UnreadableInput { path: PathBuf, reason: String },

    /// a hit lacks the data needed to compute its percent identity
    #[error("malformed hit {hit_id} in report {path:?} : {reason}")]
    MalformedHit {
        path: PathBuf,
        hit_id: String,
        reason: String,
    },

    /// csv output could not be written
    #[error("could not write output file {path:?} : {source}")]
    OutputFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
} // end of BlastError
