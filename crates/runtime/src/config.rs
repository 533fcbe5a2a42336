//! Runtime configuration.
//!
//! Defaults reproduce the built-in constants from [`PatchConfig`]; a RON
//! file can override any of them, including the two switches that expose
//! the historically disabled code paths (equip-triggered patching, bulk
//! patch on toggle).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use patch_core::{FormId, PatchConfig, TrackedItemSet};

use crate::events::EquipPatchMode;

/// Input codes bound to the two actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub grant: u32,
    pub toggle: u32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            grant: PatchConfig::KEY_GRANT,
            toggle: PatchConfig::KEY_TOGGLE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub tracked: TrackedItemSet,
    pub consumable: FormId,
    pub keys: KeyBindings,
    /// Whether equip events trigger a patch pass. Shipped disabled.
    pub equip_patch: EquipPatchMode,
    /// Whether the toggle action additionally runs a full patch pass over
    /// the player's inventory. Shipped disabled.
    pub bulk_patch_on_toggle: bool,
    pub magnitude_override: f32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tracked: PatchConfig::TRACKED_OUTFIT,
            consumable: PatchConfig::TRACKED_CONSUMABLE,
            keys: KeyBindings::default(),
            equip_patch: EquipPatchMode::default(),
            bulk_patch_on_toggle: false,
            magnitude_override: PatchConfig::EFFECT_MAGNITUDE_OVERRIDE,
        }
    }
}

impl RuntimeConfig {
    /// Loads configuration from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Invalid(format!("failed to read config file: {}", e)))?;

        let config: RuntimeConfig = ron::from_str(&content)
            .map_err(|e| ConfigError::Invalid(format!("failed to parse config RON: {}", e)))?;

        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
