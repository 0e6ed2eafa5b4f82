use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::consts::SUMMARY_FILE_NAME;
use crate::models::{Region, SizeClassTable};
use crate::reading::read_region_table;
use crate::writing::write_sized_regions;

/// Regions dispatched into per-class buckets, plus the complete summary.
pub struct GroupedRegions {
    /// Class label to the regions assigned to that class. Every configured
    /// label is present, empty or not.
    pub grouped: HashMap<String, Vec<Region>>,

    /// Every well-formed input region exactly once, in input order,
    /// whether or not any class matched it.
    pub summary: Vec<Region>,
}

/// Counts from one run of [split_region_table].
pub struct SplitReport {
    pub regions_read: usize,
    pub rows_skipped: u64,
    pub classes_written: usize,
}

///
/// Assign each region to the first size class whose range contains its
/// size. A region matching no class lands only in the summary.
///
/// # Arguments
/// - regions: the regions to dispatch
/// - classes: the ordered size class table
///
pub fn bucketize(regions: &[Region], classes: &SizeClassTable) -> GroupedRegions {
    let mut grouped: HashMap<String, Vec<Region>> = HashMap::new();
    for class in classes.classes() {
        grouped.insert(class.label.clone(), Vec::new());
    }

    let mut summary: Vec<Region> = Vec::with_capacity(regions.len());

    for region in regions {
        if let Some(class) = classes.classify(region.size()) {
            grouped.get_mut(&class.label).unwrap().push(region.clone());
        }

        summary.push(region.clone());
    }

    GroupedRegions { grouped, summary }
}

///
/// Run the full size splitting pipeline: read a region table, dispatch the
/// regions into size classes, and write one tab-separated file per class
/// plus a summary of every region, into the output directory.
///
/// # Arguments
/// - input: path to the region table (CSV with header)
/// - classes: the ordered size class table
/// - output: path to the output folder where the files should go
///
pub fn split_region_table(
    input: &Path,
    classes: &SizeClassTable,
    output: &Path,
) -> Result<SplitReport> {
    let table = read_region_table(input)
        .with_context(|| format!("There was an error reading the region table: {:?}", input))?;

    let buckets = bucketize(&table.regions, classes);

    // create actual output directory
    fs::create_dir_all(output).with_context(|| {
        format!(
            "There was an error creating the output directory: {:?}",
            output
        )
    })?;

    for class in classes.classes() {
        let rows = buckets.grouped.get(&class.label).unwrap();
        let path = output.join(class.file_name());

        write_sized_regions(rows, &path)
            .with_context(|| format!("There was an error writing the class file: {:?}", path))?;
    }

    let summary_path = output.join(SUMMARY_FILE_NAME);
    write_sized_regions(&buckets.summary, &summary_path).with_context(|| {
        format!(
            "There was an error writing the summary file: {:?}",
            summary_path
        )
    })?;

    Ok(SplitReport {
        regions_read: table.regions.len(),
        rows_skipped: table.rows_skipped,
        classes_written: classes.len(),
    })
}
