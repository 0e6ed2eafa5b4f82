use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use hitmerge_core::consts::DEFAULT_SIZESPLIT_OUT;
use hitmerge_core::models::SizeClassTable;
use hitmerge_core::split::split_region_table;

pub fn run_sizesplit(matches: &ArgMatches) -> Result<()> {
    let regions = matches
        .get_one::<String>("regions")
        .expect("A path to a region table is required.");

    let default_out = DEFAULT_SIZESPLIT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let classes = match matches.get_one::<String>("classes") {
        Some(classes) => SizeClassTable::from_file(Path::new(classes))?,
        None => SizeClassTable::default(),
    };

    let report = split_region_table(Path::new(regions), &classes, Path::new(output))?;

    println!(
        "Grouped {} regions into {} size classes ({} rows skipped)",
        report.regions_read, report.classes_written, report.rows_skipped
    );
    println!("Grouped region files saved in folder: {}", output);

    Ok(())
}
