//! Box similarity: shared documents over the summed document counts.

use storyline_core::EventBox;

/// `|docs(a) ∩ docs(b)| / (|docs(a)| + |docs(b)|)`.
///
/// This is not Jaccard: the denominator is the sum of sizes, so identical
/// document sets score 0.5 and disjoint ones 0. Documents match by value.
/// Boxes are never empty, so the denominator is never zero.
pub fn similarity(a: &EventBox, b: &EventBox) -> f64 {
    let shared = a.documents().intersection(b.documents()).count();
    shared as f64 / (a.len() + b.len()) as f64
}
