use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{BlastHit, Region, RegionSet};
use crate::reading::read_blast_table;

/// Counts from one run of [merge_blast_table], reported to the operator so
/// skipped input rows are auditable.
pub struct MergeReport {
    pub hits_read: usize,
    pub rows_skipped: u64,
    pub regions_kept: usize,
}

///
/// Merge alignment hits into contiguous regions and keep the ones whose
/// size falls inside `[size_min, size_max]` (both bounds inclusive).
///
/// Hits are sorted by (subject, start) and scanned once, carrying a single
/// open region. A hit extends the open region when it is on the same
/// subject and starts within `gap_tolerance` of the region's current end;
/// otherwise the open region is closed, size-filtered, and the hit seeds a
/// new one. Extension takes the max of the two ends, so a hit fully
/// contained in the open region leaves it unchanged.
///
/// Regions are fully merged before the size filter runs. Output order
/// follows the (subject, start) sort order.
///
/// # Arguments
/// - hits: alignment hits, in any order
/// - gap_tolerance: largest `hit.start - region.end` distance that still merges
/// - size_min: smallest region size to keep
/// - size_max: largest region size to keep
///
pub fn build_regions(
    mut hits: Vec<BlastHit>,
    gap_tolerance: u32,
    size_min: u32,
    size_max: u32,
) -> Vec<Region> {
    hits.sort_by(|a, b| {
        a.subject_id
            .cmp(&b.subject_id)
            .then_with(|| a.start.cmp(&b.start))
    });

    let mut regions: Vec<Region> = Vec::new();
    let mut current: Option<Region> = None;

    let keep = |region: &Region| {
        let size = region.size();
        size_min <= size && size <= size_max
    };

    for hit in hits {
        current = Some(match current.take() {
            None => Region::from(hit),
            Some(mut open) => {
                // hits can start before the open region's end, so the gap
                // is signed
                let gap = i64::from(hit.start) - i64::from(open.end);

                if hit.subject_id == open.subject_id && gap <= i64::from(gap_tolerance) {
                    open.end = open.end.max(hit.end);
                    open
                } else {
                    if keep(&open) {
                        regions.push(open);
                    }
                    Region::from(hit)
                }
            }
        });
    }

    // flush the final open region through the same filter
    if let Some(open) = current {
        if keep(&open) {
            regions.push(open);
        }
    }

    regions
}

///
/// Run the full region building pipeline: read a BLAST tabular file, merge
/// its hits into size-filtered regions, and write the region table.
///
/// # Arguments
/// - input: path to the BLAST tabular file, or '-' for stdin
/// - output: path for the region table
/// - gap_tolerance, size_min, size_max: see [build_regions]
///
pub fn merge_blast_table(
    input: &str,
    output: &Path,
    gap_tolerance: u32,
    size_min: u32,
    size_max: u32,
) -> Result<MergeReport> {
    let table = read_blast_table(input)
        .with_context(|| format!("There was an error reading the BLAST table: {}", input))?;

    let hits_read = table.hits.len();
    let regions = build_regions(table.hits, gap_tolerance, size_min, size_max);
    let regions = RegionSet::from(regions);

    regions
        .to_region_table(output)
        .with_context(|| format!("There was an error writing the region table: {:?}", output))?;

    Ok(MergeReport {
        hits_read,
        rows_skipped: table.rows_skipped,
        regions_kept: regions.len(),
    })
}
