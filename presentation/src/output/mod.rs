//! Output formatting and export

pub mod console;
pub mod export;
pub mod formatter;
