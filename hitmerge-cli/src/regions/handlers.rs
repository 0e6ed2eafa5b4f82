use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use hitmerge_core::consts::{
    DEFAULT_GAP_TOLERANCE, DEFAULT_MAX_REGION_SIZE, DEFAULT_MIN_REGION_SIZE, DEFAULT_REGIONS_OUT,
};
use hitmerge_core::merge::merge_blast_table;

pub fn run_regions(matches: &ArgMatches) -> Result<()> {
    let hits = matches
        .get_one::<String>("hits")
        .expect("A path to a BLAST tabular file is required.");

    let default_out = DEFAULT_REGIONS_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let gap_tolerance = matches
        .get_one::<u32>("gap-tolerance")
        .copied()
        .unwrap_or(DEFAULT_GAP_TOLERANCE);
    let min_size = matches
        .get_one::<u32>("min-size")
        .copied()
        .unwrap_or(DEFAULT_MIN_REGION_SIZE);
    let max_size = matches
        .get_one::<u32>("max-size")
        .copied()
        .unwrap_or(DEFAULT_MAX_REGION_SIZE);

    if min_size > max_size {
        return Err(anyhow::anyhow!(
            "Invalid size filter: min-size ({}) is larger than max-size ({})",
            min_size,
            max_size
        ));
    }

    let report = merge_blast_table(hits, Path::new(output), gap_tolerance, min_size, max_size)?;

    println!(
        "Merged {} hits into {} regions ({} input rows skipped)",
        report.hits_read, report.regions_kept, report.rows_skipped
    );
    println!("Region table saved to: {}", output);

    Ok(())
}
