//! contains rendering of the comparison result for the user.
//! Both renderers consume the ranked record list read only : an aligned text
//! table for the preview option and a csv file for the output option.
//! Column labels are built from the user chosen names of the two reports.

use std::path::Path;

use crate::error::BlastError;
use crate::matcher::MatchRecord;

/// the five column headers, parameterized by the display names of the two reports
pub fn headers(first_name: &str, second_name: &str) -> [String; 5] {
    [
        String::from("Reference"),
        format!("{} identity", first_name),
        format!("{} accession", first_name),
        format!("{} identity", second_name),
        format!("{} accession", second_name),
    ]
} // end of headers

//====================================================================

/// prints the matches as an aligned table on stdout
pub fn print_table(records: &[MatchRecord], first_name: &str, second_name: &str) {
    let headers = headers(first_name, second_name);
    // column widths : max of header and cells
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    let rows: Vec<[String; 5]> = records.iter().map(|r| r.cells()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    //
    let print_row = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        println!("| {} |", line.join(" | "));
    };
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    //
    println!("+-{}-+", separator.join("-+-"));
    print_row(&headers);
    println!("+-{}-+", separator.join("-+-"));
    for row in &rows {
        print_row(row);
    }
    println!("+-{}-+", separator.join("-+-"));
} // end of print_table

//====================================================================

/// dumps the matches in a csv file, header line first
pub fn write_csv(
    path: &Path,
    records: &[MatchRecord],
    first_name: &str,
    second_name: &str,
) -> Result<(), BlastError> {
    let to_output_error = |source: csv::Error| BlastError::OutputFile {
        path: path.to_path_buf(),
        source,
    };
    // headers are user supplied so we write them explicitly
    let mut csv_w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(to_output_error)?;
    csv_w
        .write_record(&headers(first_name, second_name))
        .map_err(to_output_error)?;
    for record in records {
        csv_w.serialize(record).map_err(to_output_error)?;
    }
    csv_w
        .flush()
        .map_err(|e| to_output_error(csv::Error::from(e)))?;
    log::info!("csv output saved in {:?}", path);
    //
    Ok(())
} // end of write_csv

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<MatchRecord> {
        vec![
            MatchRecord::new(
                String::from("Homo sapiens"),
                90,
                String::from("XP_001"),
                40,
                String::from("YP_001"),
            ),
            MatchRecord::new(
                String::from("Mus musculus"),
                35,
                String::from("XP_002"),
                55,
                String::from("YP_002"),
            ),
        ]
    }

    #[test]
    fn test_headers_use_display_names() {
        let h = headers("query A", "query B");
        assert_eq!(h[0], "Reference");
        assert_eq!(h[1], "query A identity");
        assert_eq!(h[4], "query B accession");
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.csv");
        write_csv(&path, &records(), "first blast", "second blast").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Reference,first blast identity,first blast accession,second blast identity,second blast accession"
        );
        assert_eq!(lines[1], "Homo sapiens,90,XP_001,40,YP_001");
        assert_eq!(lines[2], "Mus musculus,35,XP_002,55,YP_002");
    }

    #[test]
    fn test_write_csv_bad_path() {
        let res = write_csv(
            Path::new("/nonexistent/dir/matches.csv"),
            &records(),
            "a",
            "b",
        );
        assert!(matches!(res, Err(BlastError::OutputFile { .. })));
    }
} // end of mod tests
