//! blastcmp : cross comparison of two blast xml reports.
//!
//! Each report is reduced to a mapping from the bracket delimited tokens of
//! the hit definition lines to the identity/accession of the hit carrying
//! them (module extract), after filtering on a minimal percent identity.
//! The two mappings are then intersected and the common tokens ranked by the
//! first report's identity (module matcher). Rendering of the ranked matches
//! as a table or a csv file is in module answer.

pub mod answer;
pub mod error;
pub mod extract;
pub mod files;
pub mod hit;
pub mod matcher;
pub mod parameters;
