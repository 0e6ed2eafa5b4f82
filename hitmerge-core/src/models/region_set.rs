use std::path::Path;

use anyhow::Result;

use crate::models::Region;
use crate::writing::write_region_table;

///
/// An ordered collection of regions, in the order the builder emitted them.
///
pub struct RegionSet {
    pub regions: Vec<Region>,
}

pub struct RegionSetIterator<'a> {
    region_set: &'a RegionSet,
    index: usize,
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        RegionSet { regions }
    }
}

impl<'a> Iterator for RegionSetIterator<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.region_set.regions.len() {
            let region = &self.region_set.regions[self.index];
            self.index += 1;
            Some(region)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = RegionSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RegionSetIterator {
            region_set: self,
            index: 0,
        }
    }
}

impl RegionSet {
    ///
    /// Dump the region set to disk as a region table (CSV with header)
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    pub fn to_region_table(&self, path: &Path) -> Result<()> {
        write_region_table(self, path)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
