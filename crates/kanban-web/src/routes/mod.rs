//! Route handlers.

pub mod api;
pub mod assets;
pub mod board_html;
