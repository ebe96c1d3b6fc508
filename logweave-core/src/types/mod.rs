//! Shared data structures for Logweave.
//! FxHashMap/FxHashSet and small-vector aliases.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec2, SmallVec4};
