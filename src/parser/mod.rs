//! Parsing for the remap mapping input file.

pub mod remaps;

// Re-export commonly used functions
pub use remaps::parse_remap_file;
