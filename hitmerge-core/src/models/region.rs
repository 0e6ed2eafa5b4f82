use std::fmt::{self, Display};

use crate::errors::RegionTableError;
use crate::models::BlastHit;

///
/// Region struct, a merged interval on one subject sequence formed by
/// coalescing nearby hits.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub subject_id: String,
    pub start: u32,
    pub end: u32,
}

impl Region {
    ///
    /// Get the span length of the Region
    ///
    pub fn size(&self) -> u32 {
        // a reverse-strand span (end < start) never survives the size
        // filter, so it saturates instead of wrapping
        self.end.saturating_sub(self.start)
    }

    ///
    /// Get tab-separated string of the Region
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.subject_id, self.start, self.end)
    }

    /// Parse one data row of a region table (`subject_id,start,stop`).
    pub fn from_table_row(line: &str) -> Result<Self, RegionTableError> {
        let mut fields = line.split(',');

        let subject_id = fields
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RegionTableError::ShortRow(line.to_string()))?;
        let start = fields
            .next()
            .ok_or_else(|| RegionTableError::ShortRow(line.to_string()))?;
        let end = fields
            .next()
            .ok_or_else(|| RegionTableError::ShortRow(line.to_string()))?;

        let start = start
            .trim()
            .parse::<u32>()
            .map_err(|_| RegionTableError::InvalidCoordinate(start.to_string()))?;
        let end = end
            .trim()
            .parse::<u32>()
            .map_err(|_| RegionTableError::InvalidCoordinate(end.to_string()))?;

        Ok(Region {
            subject_id: subject_id.trim().to_string(),
            start,
            end,
        })
    }
}

impl From<BlastHit> for Region {
    /// Seed a new region from a single hit's subject span.
    fn from(hit: BlastHit) -> Self {
        Region {
            subject_id: hit.subject_id,
            start: hit.start,
            end: hit.end,
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_region_size() {
        let region = Region {
            subject_id: "chr1".to_string(),
            start: 1_000,
            end: 21_000,
        };

        assert_eq!(region.size(), 20_000);
    }

    #[rstest]
    fn test_reversed_span_size_saturates() {
        let region = Region {
            subject_id: "chr1".to_string(),
            start: 5_000,
            end: 400,
        };

        assert_eq!(region.size(), 0);
    }

    #[rstest]
    fn test_as_string() {
        let region = Region {
            subject_id: "chrA".to_string(),
            start: 100,
            end: 500,
        };

        assert_eq!(region.as_string(), "chrA\t100\t500");
        assert_eq!(format!("{}", region), "chrA\t100\t500");
    }

    #[rstest]
    fn test_from_table_row() {
        let region = Region::from_table_row("NZ_CP012345.1,1000,101300").unwrap();

        assert_eq!(region.subject_id, "NZ_CP012345.1");
        assert_eq!(region.start, 1_000);
        assert_eq!(region.end, 101_300);
    }

    #[rstest]
    #[case("NZ_CP012345.1,1000")]
    #[case("")]
    fn test_from_table_row_short(#[case] row: &str) {
        let res = Region::from_table_row(row);
        assert!(matches!(res, Err(RegionTableError::ShortRow(_))));
    }

    #[rstest]
    fn test_from_table_row_bad_coordinate() {
        let res = Region::from_table_row("NZ_CP012345.1,10x0,2000");
        assert!(matches!(res, Err(RegionTableError::InvalidCoordinate(_))));
    }
}
