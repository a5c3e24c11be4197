//! Re-exports of the collection types used across the workspace.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::{BTreeMap, BTreeSet};

/// SmallVec sized for call chains (rarely deeper than 4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
