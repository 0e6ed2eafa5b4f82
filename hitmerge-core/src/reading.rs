use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::consts::BLAST_TABLE_COLS;
use crate::errors::RegionTableError;
use crate::models::{BlastHit, Region};
use crate::utils::get_dynamic_reader_w_stdin;

/// The parsed contents of a BLAST tabular file, with the number of rows
/// that were dropped during best-effort parsing.
pub struct BlastTable {
    pub hits: Vec<BlastHit>,
    pub rows_skipped: u64,
}

/// The parsed contents of a region table, with the number of rows that
/// were dropped as malformed.
pub struct RegionTable {
    pub regions: Vec<Region>,
    pub rows_skipped: u64,
}

/// Scrub a subject coordinate field and coerce it to an integer. Tables
/// that passed through spreadsheets pick up non-breaking spaces around
/// the coordinate columns.
fn parse_coordinate(field: &str) -> Option<u32> {
    field.replace('\u{a0}', "").trim().parse::<u32>().ok()
}

///
/// Parse one row of a 12-column BLAST tabular file
/// (`query_id subject_id identity alignment_length mismatches gap_opens
/// q_start q_end s_start s_end evalue bit_score`, tab separated).
///
/// Returns `None` for rows that are short or whose subject coordinates do
/// not coerce to integers.
///
pub fn parse_blast_hit(line: &str) -> Option<BlastHit> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < BLAST_TABLE_COLS {
        return None;
    }

    let start = parse_coordinate(fields[8])?;
    let end = parse_coordinate(fields[9])?;

    Some(BlastHit {
        query_id: fields[0].trim().to_string(),
        subject_id: fields[1].trim().to_string(),
        start,
        end,
    })
}

///
/// Read a BLAST tabular file into memory. The file has no header row and
/// may be gzip-compressed; pass `-` to read from stdin.
///
/// Rows that fail to parse are excluded, not fatal. The exclusion count is
/// returned so the data loss is auditable.
///
pub fn read_blast_table(input: &str) -> Result<BlastTable> {
    let reader = get_dynamic_reader_w_stdin(input)?;

    let mut hits: Vec<BlastHit> = Vec::new();
    let mut rows_skipped: u64 = 0;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message("Reading BLAST hits...");

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        match parse_blast_hit(&line) {
            Some(hit) => hits.push(hit),
            None => rows_skipped += 1,
        }

        if (index + 1) % 10_000 == 0 {
            spinner.set_message(format!("Read {} rows", index + 1));
        }

        spinner.inc(1);
    }

    spinner.finish_and_clear();

    Ok(BlastTable { hits, rows_skipped })
}

///
/// Read a region table (CSV with a `subject_id,start,stop` header row)
/// back into memory.
///
/// The table may be externally supplied, so malformed rows are skipped
/// with a diagnostic rather than aborting the run.
///
pub fn read_region_table(path: &Path) -> Result<RegionTable, RegionTableError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut regions: Vec<Region> = Vec::new();
    let mut rows_skipped: u64 = 0;

    // first line is the header row
    for line in reader.lines().skip(1) {
        let line = line?;

        match Region::from_table_row(&line) {
            Ok(region) => regions.push(region),
            Err(err) => {
                println!("Skipping region row: {}", err);
                rows_skipped += 1;
            }
        }
    }

    Ok(RegionTable {
        regions,
        rows_skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn blast_row() -> &'static str {
        "q1\tNZ_CP012345.1\t98.5\t500\t5\t1\t1\t500\t1000\t1500\t1e-50\t900"
    }

    #[rstest]
    fn test_parse_blast_hit(blast_row: &str) {
        let hit = parse_blast_hit(blast_row).unwrap();

        assert_eq!(hit.query_id, "q1");
        assert_eq!(hit.subject_id, "NZ_CP012345.1");
        assert_eq!(hit.start, 1_000);
        assert_eq!(hit.end, 1_500);
    }

    #[rstest]
    fn test_parse_blast_hit_scrubs_nbsp() {
        let row = "q1\tchrA\t98.5\t500\t5\t1\t1\t500\t\u{a0}1000 \t 1500\u{a0}\t1e-50\t900";

        let hit = parse_blast_hit(row).unwrap();

        assert_eq!(hit.start, 1_000);
        assert_eq!(hit.end, 1_500);
    }

    #[rstest]
    #[case("q1\tchrA\t98.5\t500")]
    #[case("")]
    fn test_parse_blast_hit_short_row(#[case] row: &str) {
        assert_eq!(parse_blast_hit(row), None);
    }

    #[rstest]
    fn test_parse_blast_hit_bad_coordinate() {
        let row = "q1\tchrA\t98.5\t500\t5\t1\t1\t500\tNA\t1500\t1e-50\t900";

        assert_eq!(parse_blast_hit(row), None);
    }
}
