//! Collections used for identifier bookkeeping.

pub mod ordered_set;

pub use ordered_set::OrderedUniqueSet;
