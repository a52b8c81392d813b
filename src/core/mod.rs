//! Core domain types
//!
//! Feedback rows and the session that accumulates them. Everything here is
//! pure and single-threaded.

mod row;
mod session;

pub use row::{LetterState, Row, Tile};
pub use session::Session;
