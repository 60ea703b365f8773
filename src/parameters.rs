//! structures related to extraction parameters

use serde::{Deserialize, Serialize};

/// a structure to filter the hits we keep during extraction.
/// The same values must be used for both reports so that identities are comparable.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct ExtractParams {
    /// minimum percent identity (0..=100) for a hit to be kept. The boundary is
    /// inclusive : a hit at exactly the threshold is kept.
    min_identity: u32,
    /// optional bound on the number of hits scanned per report.
    /// When set, extraction stops once that many hits have been examined,
    /// whether they passed the filter or not. This trades completeness for
    /// speed on large reports : a later hit beyond the bound is never seen
    /// even if it would have matched. Unbounded by default.
    max_hits_scanned: Option<usize>,
} // end of struct ExtractParams

impl ExtractParams {
    pub fn new(min_identity: u32, max_hits_scanned: Option<usize>) -> Self {
        ExtractParams {
            min_identity,
            max_hits_scanned,
        }
    } // end of new

    pub fn get_min_identity(&self) -> u32 {
        self.min_identity
    }

    pub fn get_max_hits_scanned(&self) -> Option<usize> {
        self.max_hits_scanned
    }

    /// returns true if we filter (garbage the hit)
    pub fn filter(&self, identity: u32) -> bool {
        identity < self.min_identity
    }
} // end of impl ExtractParams

impl Default for ExtractParams {
    fn default() -> Self {
        ExtractParams {
            min_identity: 30,
            max_hits_scanned: None,
        }
    }
} // end of Default for ExtractParams

//====================================================================

// end of mod tests
