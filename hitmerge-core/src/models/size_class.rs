use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

///
/// One named size range. Both bounds are inclusive.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct SizeClass {
    pub label: String,
    pub min: u32,
    pub max: u32,
}

impl SizeClass {
    pub fn contains(&self, size: u32) -> bool {
        self.min <= size && size <= self.max
    }

    /// Name of the per-class output file.
    pub fn file_name(&self) -> String {
        format!("{}_regions.tsv", self.label)
    }
}

///
/// An ordered table of size classes. Ranges may overlap or leave gaps; the
/// table is used exactly as declared and a size is always assigned to the
/// FIRST class that contains it.
///
#[derive(Debug, Clone)]
pub struct SizeClassTable {
    classes: Vec<SizeClass>,
}

impl Default for SizeClassTable {
    fn default() -> Self {
        SizeClassTable::new(vec![
            SizeClass {
                label: "20-40k".to_string(),
                min: 20_000,
                max: 40_000,
            },
            SizeClass {
                label: "41-60k".to_string(),
                min: 41_000,
                max: 60_000,
            },
            SizeClass {
                label: "61-80k".to_string(),
                min: 61_000,
                max: 80_000,
            },
            SizeClass {
                label: "81-200k".to_string(),
                min: 81_000,
                max: 200_000,
            },
        ])
    }
}

impl SizeClassTable {
    pub fn new(classes: Vec<SizeClass>) -> Self {
        SizeClassTable { classes }
    }

    ///
    /// Load a size class table from a file with one `label min max` row per
    /// class, whitespace separated. Class files are operator configuration,
    /// so a malformed row is fatal rather than skipped.
    ///
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Couldn't open size class file: {:?}", path))?;

        let mut classes: Vec<SizeClass> = Vec::new();

        let reader = BufReader::new(file);

        for (index, line) in reader.lines().enumerate() {
            let line =
                line.with_context(|| format!("There was an error reading line {}", index + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();

            let label = parts.next();
            let min = parts.next();
            let max = parts.next();

            if let (Some(label), Some(min), Some(max)) = (label, min, max) {
                let min: u32 = min.parse().with_context(|| {
                    format!("Error parsing size class minimum: {:?}", min)
                })?;
                let max: u32 = max.parse().with_context(|| {
                    format!("Error parsing size class maximum: {:?}", max)
                })?;

                classes.push(SizeClass {
                    label: label.to_string(),
                    min,
                    max,
                });
            } else {
                anyhow::bail!(
                    "Invalid line format: Expected `label min max`, found: {:?}",
                    line
                );
            }
        }

        if classes.is_empty() {
            anyhow::bail!("No size classes found in file: {:?}", path);
        }

        Ok(SizeClassTable { classes })
    }

    /// Assign a size to the first class in declared order that contains it.
    pub fn classify(&self, size: u32) -> Option<&SizeClass> {
        self.classes.iter().find(|class| class.contains(size))
    }

    pub fn classes(&self) -> &[SizeClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_default_table() {
        let table = SizeClassTable::default();

        let labels: Vec<&str> = table.classes().iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["20-40k", "41-60k", "61-80k", "81-200k"]);
        assert_eq!(table.classes()[0].min, 20_000);
        assert_eq!(table.classes()[3].max, 200_000);
    }

    #[rstest]
    #[case(20_000, Some("20-40k"))]
    #[case(40_000, Some("20-40k"))]
    #[case(40_500, None)]
    #[case(41_000, Some("41-60k"))]
    #[case(100_000, Some("81-200k"))]
    #[case(200_001, None)]
    #[case(19_999, None)]
    fn test_classify_bounds_inclusive(#[case] size: u32, #[case] expected: Option<&str>) {
        let table = SizeClassTable::default();

        let label = table.classify(size).map(|c| c.label.as_str());

        assert_eq!(label, expected);
    }

    #[rstest]
    fn test_classify_first_match_wins() {
        let table = SizeClassTable::new(vec![
            SizeClass {
                label: "small".to_string(),
                min: 0,
                max: 50_000,
            },
            SizeClass {
                label: "overlapping".to_string(),
                min: 40_000,
                max: 100_000,
            },
        ]);

        let label = table.classify(45_000).map(|c| c.label.as_str());

        assert_eq!(label, Some("small"));
    }

    #[rstest]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tiny\t100\t500").unwrap();
        writeln!(file, "huge\t501\t900000").unwrap();

        let table = SizeClassTable::from_file(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.classes()[0].label, "tiny");
        assert_eq!(table.classes()[1].max, 900_000);
    }

    #[rstest]
    fn test_from_file_malformed_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tiny\t100").unwrap();

        let table = SizeClassTable::from_file(file.path());

        assert!(table.is_err());
    }

    #[rstest]
    fn test_from_file_bad_bound_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tiny\t100\tlots").unwrap();

        let table = SizeClassTable::from_file(file.path());

        assert!(table.is_err());
    }
}
