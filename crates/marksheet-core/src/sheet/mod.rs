//! Subject rows and the store that owns them.
//!
//! - `SubjectEntry` - one subject's raw form fields
//! - `Field` - which numeric field a value belongs to
//! - `EntryStore`, `EntryHandle` - insertion-ordered rows with stable identity

mod entry;
mod store;

pub use entry::*;
pub use store::*;
