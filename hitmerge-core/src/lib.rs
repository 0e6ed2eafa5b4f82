//!
//! # hitmerge-core
//! Core library for `hitmerge`: tools for merging BLAST tabular alignment
//! hits into contiguous candidate regions and grouping the survivors by
//! size class.
//!
//! ## Examples
//! ### Merge hits into regions
//! ```rust
//! use hitmerge_core::merge::build_regions;
//! use hitmerge_core::models::BlastHit;
//!
//! let hits = vec![
//!     BlastHit {
//!         query_id: "q1".to_string(),
//!         subject_id: "NZ_CP012345.1".to_string(),
//!         start: 100,
//!         end: 500,
//!     },
//!     BlastHit {
//!         query_id: "q2".to_string(),
//!         subject_id: "NZ_CP012345.1".to_string(),
//!         start: 1_000,
//!         end: 60_000,
//!     },
//! ];
//!
//! let regions = build_regions(hits, 110_000, 20_000, 180_000);
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].size(), 59_900);
//! ```
//!

pub mod consts;
pub mod errors;
pub mod merge;
pub mod models;
pub mod reading;
pub mod split;
pub mod utils;
pub mod writing;
