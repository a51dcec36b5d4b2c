//! CLI command implementations

pub mod check;
pub mod theme;

pub use check::run_check;
pub use theme::run_theme;
