use clap::{Arg, Command, arg};

pub use hitmerge_core::consts::SIZESPLIT_CMD;

pub fn create_sizesplit_cli() -> Command {
    Command::new(SIZESPLIT_CMD)
        .about("Split a region table into per-size-class files plus a summary of every region.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("regions")
                .help("Path to the region table (CSV with a subject_id,start,stop header)")
                .required(true),
        )
        .arg(arg!(--output <output> "Path to the output folder for the grouped files"))
        .arg(arg!(--classes <classes> "Path to a size class file (one `label min max` row per class)"))
}
