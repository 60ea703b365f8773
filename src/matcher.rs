//! A module to quantify matches between two reports.
//! A match is a protein token present in both extraction maps. Matches are
//! ranked by the first report's percent identity, best first.

use serde::Serialize;

use crate::extract::ExtractionMap;

/// One cross report match : identity and accession from both sides for a
/// protein token common to the two extraction maps.
/// Field order is the column order of the csv output.
#[derive(Clone, Debug, Serialize)]
pub struct MatchRecord {
    /// the common protein token
    protein: String,
    first_identity: u32,
    first_accession: String,
    second_identity: u32,
    second_accession: String,
} // end of MatchRecord

impl MatchRecord {
    pub fn new(
        protein: String,
        first_identity: u32,
        first_accession: String,
        second_identity: u32,
        second_accession: String,
    ) -> Self {
        MatchRecord {
            protein,
            first_identity,
            first_accession,
            second_identity,
            second_accession,
        }
    } // end of new

    pub fn get_protein(&self) -> &str {
        &self.protein
    }

    pub fn get_first_identity(&self) -> u32 {
        self.first_identity
    }

    pub fn get_first_accession(&self) -> &str {
        &self.first_accession
    }

    pub fn get_second_identity(&self) -> u32 {
        self.second_identity
    }

    pub fn get_second_accession(&self) -> &str {
        &self.second_accession
    }

    /// the five cell values in column order, for table rendering
    pub fn cells(&self) -> [String; 5] {
        [
            self.protein.clone(),
            self.first_identity.to_string(),
            self.first_accession.clone(),
            self.second_identity.to_string(),
            self.second_accession.clone(),
        ]
    } // end of cells
} // end of impl MatchRecord

//====================================================================

/// Intersects the two maps' keys and ranks the common tokens by the first
/// report's identity, descending.
///
/// The intersection iterates the first map in its key order, which a BTreeMap
/// keeps identical across runs. The sort is stable (Vec::sort_by), so records
/// with equal first identity stay in intersection order. An empty result means
/// no common token, it is not an error.
pub fn compare(first: &ExtractionMap, second: &ExtractionMap) -> Vec<MatchRecord> {
    let mut records: Vec<MatchRecord> = first
        .iter()
        .filter_map(|(protein, first_hit)| {
            second.get(protein).map(|second_hit| {
                MatchRecord::new(
                    protein.clone(),
                    first_hit.get_identity(),
                    first_hit.get_accession().to_string(),
                    second_hit.get_identity(),
                    second_hit.get_accession().to_string(),
                )
            })
        })
        .collect();
    //
    records.sort_by(|a, b| b.first_identity.cmp(&a.first_identity));
    log::debug!(
        "compare : {} common proteins out of {} and {}",
        records.len(),
        first.len(),
        second.len()
    );
    //
    records
} // end of compare

//====================================================================

// end of mod tests
