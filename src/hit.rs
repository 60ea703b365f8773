//! The module gathers structures describing one hit of a blast report.
//! A hit is one candidate alignment for the query sequence. It carries one or
//! more hsp (high scoring pair), the local alignment spans from which percent
//! identity is computed.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // bracket delimited tokens of the definition line, non greedy, no nesting
    static ref BRACKET_RE: Regex = Regex::new(r"\[([^\]]+)\]").unwrap();
}

/// One high scoring pair of a hit, fields Hsp_identity and Hsp_align-len of the report.
#[derive(Clone, Copy, Debug)]
pub struct Hsp {
    /// number of identical positions over the aligned span
    identity_count: u32,
    /// length of the aligned span
    align_len: u32,
} // end of Hsp

impl Hsp {
    pub fn new(identity_count: u32, align_len: u32) -> Self {
        Hsp {
            identity_count,
            align_len,
        }
    } // end of new

    pub fn get_identity_count(&self) -> u32 {
        self.identity_count
    }

    pub fn get_align_len(&self) -> u32 {
        self.align_len
    }

    /// percent identity of the span : round(100 * identity_count / align_len),
    /// rounded half away from zero as f64::round does.
    /// Returns None on a zero alignment length, the division is undefined and
    /// the caller must treat the hit as malformed, not coerce to 0.
    pub fn percent_identity(&self) -> Option<u32> {
        if self.align_len == 0 {
            return None;
        }
        let identity = (100. * self.identity_count as f64 / self.align_len as f64).round();
        Some(identity as u32)
    } // end of percent_identity
} // end of impl Hsp

//====================================================================

/// One hit of a report, fields Hit_id, Hit_def, Hit_accession, Hit_len and Hit_hsps.
#[derive(Clone, Debug)]
pub struct Hit {
    /// unique hit identifier inside the report
    id: String,
    /// free text definition line. Organism or protein names appear between square brackets
    definition: String,
    ///
    accession: String,
    /// total subject sequence length
    len: u32,
    /// hsp list in document order, never empty once parsed
    hsps: Vec<Hsp>,
} // end of Hit

impl Hit {
    pub fn new(id: String, definition: String, accession: String, len: u32, hsps: Vec<Hsp>) -> Self {
        Hit {
            id,
            definition,
            accession,
            len,
            hsps,
        }
    } // end of new

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_definition(&self) -> &str {
        &self.definition
    }

    pub fn get_accession(&self) -> &str {
        &self.accession
    }

    pub fn get_len(&self) -> u32 {
        self.len
    }

    /// hsp list in document order
    pub fn get_hsps(&self) -> &[Hsp] {
        &self.hsps
    }

    /// the first hsp of the hit if any. The report format puts the best scoring
    /// pair first so selecting the first one keeps the single best alignment.
    pub fn first_hsp(&self) -> Option<&Hsp> {
        self.hsps.first()
    }

    /// every bracket delimited token of the definition line, in order of apparition.
    /// These tokens are the keys used to correlate hits across two reports.
    /// A definition without brackets yields an empty vector.
    pub fn proteins(&self) -> Vec<&str> {
        BRACKET_RE
            .captures_iter(&self.definition)
            .map(|cap| cap.get(1).unwrap().as_str())
            .collect()
    } // end of proteins
} // end of impl Hit

//====================================================================

// end of mod tests
