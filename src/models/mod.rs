//! Data models for remap entries and Karabiner rules.
//!
//! Models are designed to be independent of I/O and CLI concerns.

pub mod rule;

// Re-export all model types
pub use rule::{DeviceCondition, DeviceIdentifiers, KeyEvent, Manipulator, RemapEntry, RemapRule};
