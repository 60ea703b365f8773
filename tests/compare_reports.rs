//! end to end test : two blast xml reports on disk, extraction of both sides,
//! comparison and csv dump of the ranked matches.

use std::fs;
use std::path::Path;

use blastcmp::answer::write_csv;
use blastcmp::extract::extract;
use blastcmp::files::read_report;
use blastcmp::matcher::compare;
use blastcmp::parameters::ExtractParams;

fn hit_xml(num: u32, def: &str, accession: &str, identity: u32, align_len: u32) -> String {
    format!(
        r#"<Hit>
  <Hit_num>{num}</Hit_num>
  <Hit_id>gi|{num}</Hit_id>
  <Hit_def>{def}</Hit_def>
  <Hit_accession>{accession}</Hit_accession>
  <Hit_len>300</Hit_len>
  <Hit_hsps>
    <Hsp>
      <Hsp_num>1</Hsp_num>
      <Hsp_identity>{identity}</Hsp_identity>
      <Hsp_align-len>{align_len}</Hsp_align-len>
    </Hsp>
  </Hit_hsps>
</Hit>"#
    )
}

fn write_report(path: &Path, hits: &[String]) {
    let xml = format!(
        r#"<?xml version="1.0"?>
<!DOCTYPE BlastOutput PUBLIC "-//NCBI//NCBI BlastOutput/EN" "http://www.ncbi.nlm.nih.gov/dtd/NCBI_BlastOutput.dtd">
<BlastOutput>
  <BlastOutput_program>blastp</BlastOutput_program>
  <BlastOutput_iterations>
    <Iteration>
      <Iteration_iter-num>1</Iteration_iter-num>
      <Iteration_hits>
{}
      </Iteration_hits>
    </Iteration>
  </BlastOutput_iterations>
</BlastOutput>"#,
        hits.join("\n")
    );
    fs::write(path, xml).unwrap();
}

#[test]
fn test_compare_two_reports_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.xml");
    let second_path = dir.path().join("second.xml");
    //
    // first report : three organisms, one below the threshold
    write_report(
        &first_path,
        &[
            hit_xml(1, "capsid protein [Tomato virus]", "AAA_01", 80, 100),
            hit_xml(2, "polymerase [Potato virus] chain [Tobacco virus]", "AAA_02", 55, 100),
            hit_xml(3, "helicase [Cucumber virus]", "AAA_03", 10, 100),
        ],
    );
    // second report : shares Tomato and Tobacco, Cucumber is under threshold on the first side
    write_report(
        &second_path,
        &[
            hit_xml(1, "coat protein [Tobacco virus]", "BBB_01", 65, 100),
            hit_xml(2, "replicase [Tomato virus]", "BBB_02", 33, 100),
            hit_xml(3, "helicase [Cucumber virus]", "BBB_03", 90, 100),
        ],
    );
    //
    let params = ExtractParams::new(30, None);
    let first = extract(&read_report(&first_path).unwrap(), &params).unwrap();
    let second = extract(&read_report(&second_path).unwrap(), &params).unwrap();
    //
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 3);
    //
    let records = compare(&first, &second);
    // Cucumber was filtered out of the first side, two matches remain,
    // ranked by the first report identity descending
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get_protein(), "Tomato virus");
    assert_eq!(records[0].get_first_identity(), 80);
    assert_eq!(records[0].get_first_accession(), "AAA_01");
    assert_eq!(records[0].get_second_identity(), 33);
    assert_eq!(records[0].get_second_accession(), "BBB_02");
    assert_eq!(records[1].get_protein(), "Tobacco virus");
    assert_eq!(records[1].get_first_identity(), 55);
    assert_eq!(records[1].get_second_identity(), 65);
    //
    let csv_path = dir.path().join("matches.csv");
    write_csv(&csv_path, &records, "First blast", "Second blast").unwrap();
    let content = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Reference,First blast identity,First blast accession,Second blast identity,Second blast accession"
    );
    assert_eq!(lines[1], "Tomato virus,80,AAA_01,33,BBB_02");
    assert_eq!(lines[2], "Tobacco virus,55,AAA_02,65,BBB_01");
}

#[test]
fn test_disjoint_reports_give_no_match() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.xml");
    let second_path = dir.path().join("second.xml");
    write_report(
        &first_path,
        &[hit_xml(1, "capsid protein [Tomato virus]", "AAA_01", 80, 100)],
    );
    write_report(
        &second_path,
        &[hit_xml(1, "coat protein [Tobacco virus]", "BBB_01", 65, 100)],
    );
    //
    let params = ExtractParams::default();
    let first = extract(&read_report(&first_path).unwrap(), &params).unwrap();
    let second = extract(&read_report(&second_path).unwrap(), &params).unwrap();
    assert!(compare(&first, &second).is_empty());
}

#[test]
fn test_max_hits_bound_hides_later_hits() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.xml");
    write_report(
        &first_path,
        &[
            hit_xml(1, "capsid protein [Tomato virus]", "AAA_01", 40, 100),
            hit_xml(2, "helicase [Cucumber virus]", "AAA_02", 95, 100),
        ],
    );
    let report = read_report(&first_path).unwrap();
    //
    let bounded = extract(&report, &ExtractParams::new(30, Some(1))).unwrap();
    assert_eq!(bounded.len(), 1);
    assert!(bounded.contains_key("Tomato virus"));
    //
    let unbounded = extract(&report, &ExtractParams::new(30, None)).unwrap();
    assert_eq!(unbounded.len(), 2);
}
