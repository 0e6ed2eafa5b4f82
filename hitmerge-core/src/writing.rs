use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::consts::{REGION_TABLE_HEADER, SIZED_REGION_HEADER};
use crate::models::{Region, RegionSet};

fn create_parent_dirs(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

///
/// Write a region set to disk as a region table: CSV with a
/// `subject_id,start,stop` header row. This is the hand-off format between
/// region building and size splitting.
///
/// # Arguments
/// - regions: the region set to write
/// - path: the path to the file to dump to
///
pub fn write_region_table(regions: &RegionSet, path: &Path) -> std::io::Result<()> {
    create_parent_dirs(path)?;

    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{}", REGION_TABLE_HEADER)?;
    for region in regions {
        writeln!(
            writer,
            "{},{},{}",
            region.subject_id, region.start, region.end
        )?;
    }

    writer.flush()?;
    Ok(())
}

///
/// Write regions with their computed sizes as a tab-separated file with an
/// `Accession	Start	Stop	Size` header row. An empty slice still produces
/// a file with the header, so every configured class gets an output file.
///
/// # Arguments
/// - regions: the regions to write
/// - path: the path to the file to dump to
///
pub fn write_sized_regions(regions: &[Region], path: &Path) -> std::io::Result<()> {
    create_parent_dirs(path)?;

    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "{}", SIZED_REGION_HEADER)?;
    for region in regions {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            region.subject_id,
            region.start,
            region.end,
            region.size()
        )?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    #[fixture]
    fn regions() -> Vec<Region> {
        vec![
            Region {
                subject_id: "chrA".to_string(),
                start: 1_000,
                end: 51_000,
            },
            Region {
                subject_id: "chrB".to_string(),
                start: 2_000,
                end: 92_000,
            },
        ]
    }

    #[rstest]
    fn test_write_region_table(regions: Vec<Region>) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("regions.csv");

        write_region_table(&RegionSet::from(regions), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(
            lines,
            vec![
                "subject_id,start,stop",
                "chrA,1000,51000",
                "chrB,2000,92000",
            ]
        );
    }

    #[rstest]
    fn test_write_sized_regions(regions: Vec<Region>) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sized.tsv");

        write_sized_regions(&regions, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[0], "Accession\tStart\tStop\tSize");
        assert_eq!(lines[1], "chrA\t1000\t51000\t50000");
        assert_eq!(lines[2], "chrB\t2000\t92000\t90000");
    }

    #[rstest]
    fn test_write_sized_regions_empty_still_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.tsv");

        write_sized_regions(&[], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();

        assert_eq!(contents, "Accession\tStart\tStop\tSize\n");
    }
}
