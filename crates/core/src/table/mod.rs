//! Table acquisition: secondary-engine extraction with fallback to the
//! primitive extractor's native detection.

pub mod stream;

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::warn;

use crate::error::Result;
use crate::model::Grid;
use crate::source::{ContentExtractor, Flavor, TableEngine};

/// Picks a page's tables.
///
/// The secondary engine is asked first; only when it produces nothing
/// (including when it is absent or fails) does the primitive extractor's
/// native detection run.
pub struct TableResolver<'a> {
    engine: Option<&'a dyn TableEngine>,
    flavor: Flavor,
}

impl<'a> TableResolver<'a> {
    pub fn new(engine: Option<&'a dyn TableEngine>, flavor: Flavor) -> Self {
        Self { engine, flavor }
    }

    /// Resolve tables for the 1-based `page_number`.
    ///
    /// Secondary-engine failures degrade to zero engine tables for the
    /// page; primitive-extractor failures propagate.
    pub fn resolve<E: ContentExtractor>(
        &self,
        path: &Path,
        page_number: usize,
        extractor: &mut E,
    ) -> Result<Vec<Grid>> {
        let engine_grids = self.engine_tables(path, page_number);
        if !engine_grids.is_empty() {
            return Ok(engine_grids);
        }

        let native = extractor.page_tables(page_number - 1)?;
        Ok(native.into_iter().filter(has_content).collect())
    }

    fn engine_tables(&self, path: &Path, page_number: usize) -> Vec<Grid> {
        let Some(engine) = self.engine else {
            return Vec::new();
        };
        match engine.read_tables(path, page_number, self.flavor) {
            Ok(grids) => dedup_grids(grids),
            Err(err) => {
                warn!(page = page_number, error = %err, "table engine failed, continuing without engine tables");
                Vec::new()
            }
        }
    }
}

/// Drop repeated grids, keeping the first occurrence of each.
fn dedup_grids(grids: Vec<Grid>) -> Vec<Grid> {
    let mut seen: FxHashSet<Grid> = FxHashSet::default();
    grids.into_iter().filter(|g| seen.insert(g.clone())).collect()
}

/// A grid counts as a table only if some cell holds text; all-blank grids
/// are phantom detections.
fn has_content(grid: &Grid) -> bool {
    grid.iter().any(|row| row.iter().any(|cell| !cell.is_empty()))
}
