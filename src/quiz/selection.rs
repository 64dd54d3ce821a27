//! Question selection policy
//!
//! Filters the catalog down to the items still in rotation (mastery ratio
//! below the threshold, catalog order preserved) and shuffles them into
//! the working set for one pass. The rng is injected so tests can pin the
//! permutation with a seed.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Item};

use super::mastery::{stats_for, MasteryMap};

/// Items not yet mastered, in catalog order
pub fn available_items(catalog: &Catalog, map: &MasteryMap) -> Vec<Item> {
    catalog
        .items()
        .iter()
        .filter(|item| !stats_for(map, &item.country).is_mastered())
        .cloned()
        .collect()
}

/// Uniformly random permutation of the available items
pub fn build_working_set(mut items: Vec<Item>, rng: &mut impl Rng) -> Vec<Item> {
    items.shuffle(rng);
    items
}
