//! User-facing strings in each supported language.

mod language;
mod localize;
mod strings;

pub use language::*;
pub use localize::*;
pub use strings::*;
