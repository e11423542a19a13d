//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the binary name and the USB identifiers of the Yubikey
//! device the generated rules are scoped to.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Yubikey Rule Generator";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "yubikey-gen-rules";

/// USB vendor ID of the Yubikey (Yubico).
pub const YUBIKEY_VENDOR_ID: u32 = 4176;

/// USB product ID of the Yubikey.
pub const YUBIKEY_PRODUCT_ID: u32 = 1031;

/// Device description string Karabiner matches against.
pub const YUBIKEY_DESCRIPTION: &str = "Yubico";
