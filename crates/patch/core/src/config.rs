//! Built-in configuration constants.
//!
//! These reproduce the identifiers and bindings the engine shipped with.
//! The runtime's `RuntimeConfig` defaults to them but can override every
//! value from a configuration file.

use crate::form::FormId;
use crate::tracked::TrackedItemSet;

/// Compile-time defaults for tracked identifiers and hotkey bindings.
pub struct PatchConfig;

impl PatchConfig {
    /// The four outfit pieces whose instances get their transient
    /// modifiers stripped.
    pub const TRACKED_OUTFIT: TrackedItemSet = TrackedItemSet::new([
        FormId::new(0x000E_35D7),
        FormId::new(0x000E_35D6),
        FormId::new(0x000E_35D8),
        FormId::new(0x000E_35D9),
    ]);

    /// The consumable granted by the grant hotkey.
    pub const TRACKED_CONSUMABLE: FormId = FormId::new(0x0003_EB2E);

    /// Input code that triggers the consumable grant.
    pub const KEY_GRANT: u32 = 37;

    /// Input code that flips the toggle and grants outfit templates.
    pub const KEY_TOGGLE: u32 = 35;

    /// Magnitude forced onto the consumable's first magic effect by the
    /// grant action. Applied to the shared definition, debug use only.
    pub const EFFECT_MAGNITUDE_OVERRIDE: f32 = 1000.0;
}
