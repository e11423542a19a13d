//! Karabiner complex modification rule structures.
//!
//! These structs mirror the JSON shape Karabiner-Elements expects for
//! `complex_modifications` rules (see <https://karabiner-elements.pqrs.org/docs/json/>).
//! Field declaration order matches the emitted JSON, so serialized output
//! reads the same way the Karabiner documentation presents it.

use serde::{Deserialize, Serialize};

use crate::constants::{YUBIKEY_DESCRIPTION, YUBIKEY_PRODUCT_ID, YUBIKEY_VENDOR_ID};

/// A single key remapping sourced from one entry of the input mapping file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapEntry {
    /// Key code as interpreted under the Dvorak layout.
    pub from_key: String,
    /// Key code the Qwerty layout produces at the same position.
    pub to_key: String,
}

/// One Karabiner rule: a description plus its manipulators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapRule {
    /// Human-readable summary shown in the Karabiner UI.
    pub description: String,
    /// The key event rewrites this rule performs (always exactly one here).
    pub manipulators: Vec<Manipulator>,
}

/// A single `basic` manipulator rewriting one key event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manipulator {
    /// Manipulator kind; always `"basic"` for these rules.
    #[serde(rename = "type")]
    pub kind: String,
    /// The key event to match.
    pub from: KeyEvent,
    /// The key event to emit instead.
    pub to: KeyEvent,
    /// Conditions restricting when the manipulator applies.
    pub conditions: Vec<DeviceCondition>,
}

/// A key event identified by its Karabiner key code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Karabiner key code identifier (e.g. `"a"`, `"semicolon"`).
    pub key_code: String,
}

/// A `device_if` condition scoping a manipulator to specific hardware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCondition {
    /// Condition kind; always `"device_if"` for these rules.
    #[serde(rename = "type")]
    pub kind: String,
    /// Devices the condition matches.
    pub identifiers: Vec<DeviceIdentifiers>,
}

/// USB identifiers of one input device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentifiers {
    /// USB product ID.
    pub product_id: u32,
    /// USB vendor ID.
    pub vendor_id: u32,
    /// Device description string.
    pub description: String,
}

impl RemapRule {
    /// Builds the rule for one remap entry, scoped to the Yubikey.
    #[must_use]
    pub fn for_remap(entry: &RemapEntry) -> Self {
        Self {
            description: format!(
                "Map Dvorak {} to Qwerty {} for Yubikey",
                entry.from_key, entry.to_key
            ),
            manipulators: vec![Manipulator {
                kind: "basic".to_string(),
                from: KeyEvent {
                    key_code: entry.from_key.clone(),
                },
                to: KeyEvent {
                    key_code: entry.to_key.clone(),
                },
                conditions: vec![DeviceCondition {
                    kind: "device_if".to_string(),
                    identifiers: vec![DeviceIdentifiers {
                        product_id: YUBIKEY_PRODUCT_ID,
                        vendor_id: YUBIKEY_VENDOR_ID,
                        description: YUBIKEY_DESCRIPTION.to_string(),
                    }],
                }],
            }],
        }
    }
}
