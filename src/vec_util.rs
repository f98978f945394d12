use crate::slice_util::has;

pub fn append_if_some<T>(slice: &mut Vec<T>, item: Option<T>) {
    if let Some(value) = item {
        slice.push(value);
    }
}

pub fn append_if_new<T: PartialEq>(slice: &mut Vec<T>, item: T) {
    if !has(slice, &item) {
        slice.push(item);
    }
}

pub fn remove<T: PartialEq>(slice: &mut Vec<T>, item: &T) -> Vec<T> {
    remove_filter(slice, |this| this == item)
}

// Stable partition: elements matching the predicate are drained out and
// returned, the rest stay in the Vec, both sides in their original relative
// order.
pub fn remove_filter<T, F>(slice: &mut Vec<T>, predicate: F) -> Vec<T> where F: FnMut(&T) -> bool {
    let (removed, kept): (Vec<T>, Vec<T>) = slice.drain(..).partition(predicate);
    *slice = kept;
    removed
}

// Index-wise overlay, not concatenation: the result is as long as the
// longest input, starts out all default values, and each input is written
// over it in argument order, so the last argument wins at any shared index.
// Example: merge(&[&[1, 2, 3], &[9, 9]]) = [9, 9, 3]
pub fn merge<T: Clone + Default>(slices: &[&[T]]) -> Vec<T> {
    let max_size = slices.iter().map(|s| s.len()).max().unwrap_or(0);

    let mut result = vec![T::default(); max_size];

    for s in slices {
        for (index, value) in s.iter().enumerate() {
            result[index] = value.clone();
        }
    }

    result
}
