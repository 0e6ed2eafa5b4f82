use clap::{Arg, Command, arg};

pub use hitmerge_core::consts::REGIONS_CMD;

pub fn create_regions_cli() -> Command {
    Command::new(REGIONS_CMD)
        .about("Merge BLAST tabular hits into size-filtered candidate regions.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("hits")
                .help("Path to the 12-column BLAST tabular file, or '-' for stdin")
                .required(true),
        )
        .arg(arg!(--output <output> "Path for the merged region table"))
        .arg(
            Arg::new("gap-tolerance")
                .long("gap-tolerance")
                .short('g')
                .value_parser(clap::value_parser!(u32))
                .help("Largest distance between a region's end and the next hit's start that still merges"),
        )
        .arg(
            Arg::new("min-size")
                .long("min-size")
                .value_parser(clap::value_parser!(u32))
                .help("Smallest region size to keep (inclusive)"),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .value_parser(clap::value_parser!(u32))
                .help("Largest region size to keep (inclusive)"),
        )
}
