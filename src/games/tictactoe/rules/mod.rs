//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from the engine
//! so they can be checked in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_win;
