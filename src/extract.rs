//! Hit extraction from a parsed report.
//! The report's hit list is reduced to a mapping from protein token to the
//! identity/accession of the hit that carried it. The mapping of each report
//! is then intersected with the other report's one by the matcher module.

use std::collections::BTreeMap;

use crate::error::BlastError;
use crate::files::BlastReport;
use crate::parameters::ExtractParams;

/// What we keep of a hit once extracted : the percent identity of its best hsp
/// and its accession. All protein tokens of one hit share the same values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedHit {
    /// percent identity of the first hsp, 0..=100
    identity: u32,
    ///
    accession: String,
} // end of ExtractedHit

impl ExtractedHit {
    pub fn new(identity: u32, accession: String) -> Self {
        ExtractedHit {
            identity,
            accession,
        }
    } // end of new

    pub fn get_identity(&self) -> u32 {
        self.identity
    }

    pub fn get_accession(&self) -> &str {
        &self.accession
    }
} // end of impl ExtractedHit

/// per report mapping from protein token to its extracted hit.
/// A BTreeMap keeps key iteration order identical across runs, which fixes the
/// intersection order in the matcher and so the tie order of its stable sort.
pub type ExtractionMap = BTreeMap<String, ExtractedHit>;

//====================================================================

/// Scans the report's hits in document order and builds the extraction map.
///
/// For each hit the first hsp gives the percent identity (the format puts the
/// best scoring pair first). Hits under the threshold are skipped. Every
/// bracket delimited token of the definition line becomes a key of the map ;
/// when two hits of the report carry the same token the later one overwrites
/// the earlier entry.
///
/// If `max_hits_scanned` is set in the parameters, scanning stops after that
/// many hits whether they passed the filter or not. Hits beyond the bound are
/// never seen, even if they would have matched.
///
/// The map is built locally and returned, the function has no side effects.
pub fn extract(report: &BlastReport, params: &ExtractParams) -> Result<ExtractionMap, BlastError> {
    let path = report.get_path();
    let mut extracted = ExtractionMap::new();
    let mut nb_scanned: usize = 0;
    //
    for hit in report.get_hits() {
        if let Some(max) = params.get_max_hits_scanned() {
            if nb_scanned >= max {
                log::info!(
                    "extraction of {:?} stopped after {} hits scanned, {} remaining hits not seen",
                    path,
                    nb_scanned,
                    report.nb_hits() - nb_scanned
                );
                break;
            }
        }
        nb_scanned += 1;
        // single best alignment assumption : the first hsp, never an average over hsps
        let hsp = hit.first_hsp().ok_or_else(|| BlastError::MalformedHit {
            path: path.to_path_buf(),
            hit_id: hit.get_id().to_string(),
            reason: String::from("hit without any hsp"),
        })?;
        let identity = hsp.percent_identity().ok_or_else(|| BlastError::MalformedHit {
            path: path.to_path_buf(),
            hit_id: hit.get_id().to_string(),
            reason: String::from("hsp with zero alignment length"),
        })?;
        if params.filter(identity) {
            log::trace!(
                "hit {} filtered, identity {} below threshold {}",
                hit.get_id(),
                identity,
                params.get_min_identity()
            );
            continue;
        }
        // last write wins on duplicate tokens within one report
        for protein in hit.proteins() {
            extracted.insert(
                protein.to_string(),
                ExtractedHit::new(identity, hit.get_accession().to_string()),
            );
        }
    }
    log::debug!(
        "extracted {} proteins from {} hits of {:?}",
        extracted.len(),
        nb_scanned,
        path
    );
    //
    Ok(extracted)
} // end of extract

//====================================================================

// end of mod tests
