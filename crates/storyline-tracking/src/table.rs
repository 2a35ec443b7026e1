use std::collections::btree_map::{self, BTreeMap};

use storyline_core::{EventBox, WordPair};

/// Word pair → box, iterated in lexicographic word-pair order.
///
/// The table is the only state carried from one window to the next. It is
/// passed by value into [`crate::bucketize`] and handed back afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingTable {
    boxes: BTreeMap<WordPair, EventBox>,
}

impl TrackingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pair: &WordPair) -> Option<&EventBox> {
        self.boxes.get(pair)
    }

    pub fn get_mut(&mut self, pair: &WordPair) -> Option<&mut EventBox> {
        self.boxes.get_mut(pair)
    }

    pub fn contains(&self, pair: &WordPair) -> bool {
        self.boxes.contains_key(pair)
    }

    /// Start tracking a box under its own word pair. Returns any box it replaced.
    pub fn insert(&mut self, event_box: EventBox) -> Option<EventBox> {
        self.boxes.insert(event_box.word_pair().clone(), event_box)
    }

    /// Keep only the boxes for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&WordPair, &EventBox) -> bool) {
        self.boxes.retain(|pair, event_box| keep(pair, event_box));
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, WordPair, EventBox> {
        self.boxes.iter()
    }

    pub fn word_pairs(&self) -> impl Iterator<Item = &WordPair> {
        self.boxes.keys()
    }

    pub fn boxes(&self) -> impl Iterator<Item = &EventBox> {
        self.boxes.values()
    }
}

impl<'a> IntoIterator for &'a TrackingTable {
    type Item = (&'a WordPair, &'a EventBox);
    type IntoIter = btree_map::Iter<'a, WordPair, EventBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}

impl FromIterator<EventBox> for TrackingTable {
    fn from_iter<I: IntoIterator<Item = EventBox>>(iter: I) -> Self {
        let mut table = Self::new();
        for event_box in iter {
            table.insert(event_box);
        }
        table
    }
}
