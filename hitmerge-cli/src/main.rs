mod regions;
mod sizesplit;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "hitmerge";
    pub const BIN_NAME: &str = "hitmerge";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Merge BLAST tabular alignment hits into candidate genomic regions and group them into size classes.")
        .subcommand_required(true)
        .subcommand(regions::cli::create_regions_cli())
        .subcommand(sizesplit::cli::create_sizesplit_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // REGION BUILDING
        //
        Some((regions::cli::REGIONS_CMD, matches)) => {
            regions::handlers::run_regions(matches)?;
        }

        //
        // SIZE SPLITTING
        //
        Some((sizesplit::cli::SIZESPLIT_CMD, matches)) => {
            sizesplit::handlers::run_sizesplit(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
