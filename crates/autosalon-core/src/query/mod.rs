//! Typed predicate builder and page windowing for catalog queries.

pub mod pagination;
pub mod predicate;

pub use pagination::PageWindow;
pub use predicate::{CarColumn, CASEFOLD_FN, Condition, Operator, Predicate, RenderedPredicate, SqlValue};
