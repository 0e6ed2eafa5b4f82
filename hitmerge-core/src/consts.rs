// Subcommand names
pub const REGIONS_CMD: &str = "regions";
pub const SIZESPLIT_CMD: &str = "sizesplit";

// Region merging defaults
pub const DEFAULT_GAP_TOLERANCE: u32 = 110_000;
pub const DEFAULT_MIN_REGION_SIZE: u32 = 20_000;
pub const DEFAULT_MAX_REGION_SIZE: u32 = 180_000;

// Output locations
pub const DEFAULT_REGIONS_OUT: &str = "regions_output_table.csv";
pub const DEFAULT_SIZESPLIT_OUT: &str = "grouped_regions";
pub const SUMMARY_FILE_NAME: &str = "summary_sizes.tsv";

// Table formats
pub const BLAST_TABLE_COLS: usize = 12;
pub const REGION_TABLE_HEADER: &str = "subject_id,start,stop";
pub const SIZED_REGION_HEADER: &str = "Accession\tStart\tStop\tSize";

pub const GZ_FILE_EXTENSION: &str = "gz";
