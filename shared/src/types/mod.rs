//! Wire-level record types.

mod envelope;

pub use envelope::{Envelope, Page, RowsAffected};
