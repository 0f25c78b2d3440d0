//! Narration - procedural labels and descriptions derived from a point's
//! coordinates and taxonomy, rendered through a [`Lexicon`].
//!
//! Generation never fails. Anything the lexicon cannot supply is left out.

mod description;
mod lexicon;
mod rules;

pub use description::*;
pub use lexicon::*;
pub use rules::*;

use despair_model::{Axis, AxisZone, DespairVector, Point};

/// The author's description if there is one, otherwise a generated one.
pub fn effective_description(point: &Point, lexicon: &dyn Lexicon) -> String {
    match point.author_description() {
        Some(text) => text.to_string(),
        None => generate_description(point, lexicon),
    }
}

/// One-line zone summary of a vector, e.g. `Infinite / Necessity / Semi-conscious`.
pub fn zone_summary(vector: &DespairVector, lexicon: &dyn Lexicon) -> String {
    Axis::ALL
        .iter()
        .filter_map(|axis| lexicon.zone_name(*axis, AxisZone::of(axis.value(vector))))
        .collect::<Vec<_>>()
        .join(" / ")
}
