//! This file contains blast xml report reading.
//! A report is produced by a single query search : we read the hits of its
//! first Iteration element, in document order, with their hsp list.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::BlastError;
use crate::hit::{Hit, Hsp};

/// A parsed blast report : the ordered hit list of the first iteration.
pub struct BlastReport {
    /// file the report was read from
    path: PathBuf,
    /// hits in document order
    hits: Vec<Hit>,
} // end of BlastReport

impl BlastReport {
    pub fn new(path: PathBuf, hits: Vec<Hit>) -> Self {
        BlastReport { path, hits }
    } // end of new

    pub fn get_path(&self) -> &Path {
        &self.path
    }

    /// hits in document order
    pub fn get_hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn nb_hits(&self) -> usize {
        self.hits.len()
    }
} // end of impl BlastReport

//====================================================================

fn unreadable(path: &Path, reason: String) -> BlastError {
    BlastError::UnreadableInput {
        path: path.to_path_buf(),
        reason,
    }
}

// text of the first child element with given tag name
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|c| c.has_tag_name(name))
        .and_then(|c| c.text())
}

fn hit_field<'a>(path: &Path, node: Node<'a, '_>, name: &str) -> Result<&'a str, BlastError> {
    child_text(node, name).ok_or_else(|| unreadable(path, format!("hit without {} element", name)))
}

fn parse_u32(path: &Path, name: &str, text: &str) -> Result<u32, BlastError> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| unreadable(path, format!("{} is not an integer : {}", name, text)))
}

// one Hit element with its Hit_hsps children
fn parse_hit(path: &Path, node: Node<'_, '_>) -> Result<Hit, BlastError> {
    let id = hit_field(path, node, "Hit_id")?;
    let definition = hit_field(path, node, "Hit_def")?;
    let accession = hit_field(path, node, "Hit_accession")?;
    let len = parse_u32(path, "Hit_len", hit_field(path, node, "Hit_len")?)?;
    //
    let mut hsps = Vec::<Hsp>::new();
    if let Some(hsps_node) = node.children().find(|c| c.has_tag_name("Hit_hsps")) {
        for hsp_node in hsps_node.children().filter(|c| c.has_tag_name("Hsp")) {
            let malformed = |reason: String| BlastError::MalformedHit {
                path: path.to_path_buf(),
                hit_id: id.to_string(),
                reason,
            };
            let identity_count = child_text(hsp_node, "Hsp_identity")
                .ok_or_else(|| malformed(String::from("hsp without Hsp_identity element")))?;
            let align_len = child_text(hsp_node, "Hsp_align-len")
                .ok_or_else(|| malformed(String::from("hsp without Hsp_align-len element")))?;
            hsps.push(Hsp::new(
                parse_u32(path, "Hsp_identity", identity_count)?,
                parse_u32(path, "Hsp_align-len", align_len)?,
            ));
        }
    }
    if hsps.is_empty() {
        return Err(BlastError::MalformedHit {
            path: path.to_path_buf(),
            hit_id: id.to_string(),
            reason: String::from("hit without any hsp"),
        });
    }
    //
    Ok(Hit::new(
        id.to_string(),
        definition.to_string(),
        accession.to_string(),
        len,
        hsps,
    ))
} // end of parse_hit

/// parses a report from its xml content. Exposed for tests, read_report is the entry point.
pub fn parse_report(path: &Path, xml: &str) -> Result<Vec<Hit>, BlastError> {
    // blast reports carry a doctype declaration, dtd parsing must be allowed
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| unreadable(path, format!("xml parse error : {}", e)))?;
    // a single query report has exactly one Iteration, we read the first one
    let iteration = doc
        .descendants()
        .find(|n| n.has_tag_name("Iteration"))
        .ok_or_else(|| unreadable(path, String::from("no Iteration element in report")))?;
    //
    let mut hits = Vec::<Hit>::new();
    for hit_node in iteration.descendants().filter(|n| n.has_tag_name("Hit")) {
        hits.push(parse_hit(path, hit_node)?);
    }
    log::debug!("parsed {} hits from report {:?}", hits.len(), path);
    //
    Ok(hits)
} // end of parse_report

/// opens and parses a blast xml report file
pub fn read_report(path: &Path) -> Result<BlastReport, BlastError> {
    log::trace!("reading report {:?}", path);
    let xml = fs::read_to_string(path).map_err(|e| unreadable(path, e.to_string()))?;
    let hits = parse_report(path, &xml)?;
    Ok(BlastReport::new(path.to_path_buf(), hits))
} // end of read_report

//====================================================================

// end of mod tests
