//! Small generic helpers over slices and Vecs: zero-copy reinterpretation,
//! guarded appends, predicate search, filtered removal, unordered equality,
//! and index-wise overlay merge. Every operation is a pure single pass over
//! the sequences it is handed; the crate keeps no state of its own, so
//! concurrent use is fine as long as the caller does not hand the same
//! `&mut Vec` to two calls at once.

mod cast;
mod slice_util;
mod vec_util;

pub use crate::cast::copy_to_type;
pub use crate::slice_util::{equal_unordered, find, has, has_filter};
pub use crate::vec_util::{append_if_new, append_if_some, merge, remove, remove_filter};
