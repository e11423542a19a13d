//! Yubikey Rule Generator Library
//!
//! This library provides the core functionality for generating Karabiner
//! `complex_modifications` rules that remap Dvorak key codes to their Qwerty
//! equivalents, scoped to a Yubikey USB device.

// Module declarations
pub mod constants;
pub mod generator;
pub mod models;
pub mod parser;
