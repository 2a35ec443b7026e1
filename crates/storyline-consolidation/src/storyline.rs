use storyline_core::ConsolidatedGroup;
use storyline_tracking::TrackingTable;

use crate::hierarchy::{consolidate, Hierarchy};

/// One window's storylines: the tracking table snapshot and the forest built over it.
#[derive(Debug)]
pub struct Storyline<'a> {
    table: &'a TrackingTable,
    hierarchy: Hierarchy,
}

impl<'a> Storyline<'a> {
    pub fn new(table: &'a TrackingTable, similarity_threshold: f64) -> Self {
        Self {
            table,
            hierarchy: consolidate(table, similarity_threshold),
        }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// One group per root, in the order of [`Hierarchy::flatten`].
    pub fn consolidated_groups(&self) -> Vec<ConsolidatedGroup> {
        self.hierarchy
            .flatten()
            .into_iter()
            .map(|(root, members)| {
                let boxes = members
                    .iter()
                    .filter_map(|pair| self.table.get(pair).cloned())
                    .collect();
                ConsolidatedGroup {
                    root,
                    members,
                    boxes,
                }
            })
            .collect()
    }
}
