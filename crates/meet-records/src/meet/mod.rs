//! Meet, registration and lifting data consumed by the records logic.
//!
//! Nothing in this crate mutates these types while computing records.

mod entry;
mod enums;
mod state;
mod units;

pub use entry::*;
pub use enums::*;
pub use state::*;
pub use units::*;
