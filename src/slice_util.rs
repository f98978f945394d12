use std::collections::HashSet;
use std::hash::Hash;

// Index of the first element satisfying the predicate, scanning left to
// right and stopping at the first hit; ties break toward the lowest index.
pub fn find<T, F>(slice: &[T], mut predicate: F) -> Option<usize> where F: FnMut(&T) -> bool {
    for (index, item) in slice.iter().enumerate() {
        if predicate(item) {
            return Some(index);
        }
    }

    None
}

pub fn has<T: PartialEq>(slice: &[T], item: &T) -> bool {
    has_filter(slice, |this| this == item)
}

// Same left-to-right, short-circuiting scan as find, so a side-effecting
// predicate sees the same prefix of elements.
pub fn has_filter<T, F>(slice: &[T], mut predicate: F) -> bool where F: FnMut(&T) -> bool {
    for item in slice {
        if predicate(item) {
            return true;
        }
    }

    false
}

// Equal length plus set membership: every element of b must occur somewhere
// in a. Multiplicity is NOT checked, so equal_unordered(&[1, 1, 2], &[1, 2, 2])
// is true. Callers that need multiset equality should count occurrences
// themselves.
pub fn equal_unordered<T: Hash + Eq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let seen: HashSet<&T> = a.iter().collect();

    b.iter().all(|item| seen.contains(item))
}
