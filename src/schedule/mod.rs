//! Hierarchical filter-and-pagination engine for the training schedule.
//!
//! Records are grouped by region → district → institution. The user picks a
//! value at each level, optionally types a search string, and pages through
//! what remains. [`Session`] owns the state and keeps every derived view in
//! step with it; the other modules are the pure functions it is built from.

pub mod cascade;
pub mod filter;
pub mod pagination;
pub mod persist;
pub mod record;
pub mod selection;
pub mod session;

#[cfg(test)]
mod testing;

pub use pagination::PageError;
pub use record::{RawRecord, Record, RecordStore, PLACEHOLDER};
pub use selection::Selection;
pub use session::Session;
