//! # Duplicate Elimination
//!
//! Removal of value-equal entries from a list, keeping the first occurrence
//! of each and the relative order of what remains. Runs in linear time.
//!
//! Presence handling (materializing an absent list, reporting what was
//! done) sits on top of this in the validation context.

use std::collections::HashSet;
use std::hash::Hash;

/// Remove later duplicates from `list`. Returns how many were removed.
pub fn eliminate_duplicates<T: Eq + Hash>(list: &mut Vec<T>) -> usize {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(list.len());
        list.iter().map(|item| seen.insert(item)).collect()
    };
    let before = list.len();
    let mut keep = keep.into_iter();
    list.retain(|_| keep.next().unwrap_or(true));
    before - list.len()
}

/// How many entries [`eliminate_duplicates`] would remove, without touching
/// the list.
pub fn count_duplicates<T: Eq + Hash>(list: &[T]) -> usize {
    let unique: HashSet<&T> = list.iter().collect();
    list.len() - unique.len()
}
