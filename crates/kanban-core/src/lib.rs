//! Kanban Core Library
//!
//! Board state, the reducer that evolves it, and the store that owns it.

pub mod board;
pub mod config;
pub mod error;
pub mod store;

pub use board::{reduce, reduce_with, Action, AppState, List, Task};
pub use error::{BoardError, BoardResult};
pub use store::Store;
