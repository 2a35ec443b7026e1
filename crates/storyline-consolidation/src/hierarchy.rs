//! Union-Find over tracked word pairs, with an asymmetric redirect.
//!
//! For every pair of boxes `(i, j)`, `i` before `j` in table order, that is
//! similar enough, the root of `i` is found by walking its parent chain and
//! `j` alone is pointed at that root. Nothing else moves: there is no union
//! by rank, no path compression, and whatever `j` was attached to before is
//! simply overwritten. Under chained similarity this decides which boxes end
//! up together, so the procedure is kept exactly as is.

use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use storyline_core::WordPair;
use storyline_tracking::TrackingTable;
use tracing::debug;

use crate::similarity::similarity;

/// Child → parent forest over one window's word pairs. A root is its own parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    /// Word pairs in tracking-table order.
    pairs: Vec<WordPair>,
    index: HashMap<WordPair, usize>,
    parents: Vec<usize>,
}

impl Hierarchy {
    /// Every pair is its own root.
    pub fn singletons(pairs: Vec<WordPair>) -> Self {
        let index = pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| (pair.clone(), i))
            .collect();
        let parents = (0..pairs.len()).collect();
        Self {
            pairs,
            index,
            parents,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn parent_of(&self, pair: &WordPair) -> Option<&WordPair> {
        let &i = self.index.get(pair)?;
        Some(&self.pairs[self.parents[i]])
    }

    pub fn root_of(&self, pair: &WordPair) -> Option<&WordPair> {
        let &i = self.index.get(pair)?;
        Some(&self.pairs[self.find(i)])
    }

    /// Number of parent links between `pair` and its root.
    pub fn depth_of(&self, pair: &WordPair) -> Option<usize> {
        let &start = self.index.get(pair)?;
        let mut depth = 0;
        let mut i = start;
        while self.parents[i] != i {
            i = self.parents[i];
            depth += 1;
        }
        Some(depth)
    }

    /// The raw child → parent mapping.
    pub fn parent_map(&self) -> BTreeMap<WordPair, WordPair> {
        self.pairs
            .iter()
            .zip(&self.parents)
            .map(|(child, &parent)| (child.clone(), self.pairs[parent].clone()))
            .collect()
    }

    /// Point `child` at the current root of `anchor`.
    ///
    /// Requires `anchor < child`: every parent then sits earlier in table
    /// order than its children, so the forest stays acyclic.
    pub(crate) fn redirect(&mut self, child: usize, anchor: usize) {
        debug_assert!(anchor < child, "redirect({child}, {anchor}) would allow a cycle");
        let root = self.find(anchor);
        self.parents[child] = root;
    }

    /// Resolve every pair to its root and group them.
    ///
    /// Groups are listed in the order their root is first reached while
    /// walking pairs in table order; members keep table order.
    pub fn flatten(&self) -> Vec<(WordPair, Vec<WordPair>)> {
        let mut slots: HashMap<usize, usize> = HashMap::new();
        let mut forest: Vec<(WordPair, Vec<WordPair>)> = Vec::new();
        for (i, pair) in self.pairs.iter().enumerate() {
            let root = self.find(i);
            let slot = *slots.entry(root).or_insert_with(|| {
                forest.push((self.pairs[root].clone(), Vec::new()));
                forest.len() - 1
            });
            forest[slot].1.push(pair.clone());
        }
        forest
    }

    fn find(&self, mut i: usize) -> usize {
        while self.parents[i] != i {
            i = self.parents[i];
        }
        i
    }
}

/// Link every sufficiently similar pair of tracked boxes.
///
/// Similarities are computed in parallel; the redirects are then applied one
/// at a time in `(i, j)` order so the result matches a sequential scan.
pub fn consolidate(table: &TrackingTable, similarity_threshold: f64) -> Hierarchy {
    let boxes: Vec<_> = table.boxes().collect();
    let mut hierarchy = Hierarchy::singletons(table.word_pairs().cloned().collect());
    let n = boxes.len();

    let boxes = &boxes;
    let links: Vec<(usize, usize)> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            (i + 1..n)
                .filter(move |&j| similarity(boxes[i], boxes[j]) >= similarity_threshold)
                .map(move |j| (i, j))
        })
        .collect();

    for &(i, j) in &links {
        hierarchy.redirect(j, i);
    }

    debug!(
        boxes = n,
        links = links.len(),
        threshold = similarity_threshold,
        "boxes consolidated"
    );
    hierarchy
}
