//! Input listener: routes button presses to one-shot actions.

use tracing::{info, trace, warn};

use patch_core::{FormId, TrackedItemSet};

use crate::actions;
use crate::config::{KeyBindings, RuntimeConfig};
use crate::host::WorldHost;
use crate::toggle::ToggleFlag;

use super::{ButtonState, EventControl, InputBatch, InputSink};

/// Stateless dispatch from fixed input codes to one-shot actions.
///
/// Only fires on the pressed transition of a button event, never on
/// release or repeat, and only while the host reports its simulation as
/// active. The toggle flag is owned here, handed in by the composition
/// root at construction.
pub struct HotkeyRouter {
    keys: KeyBindings,
    flag: ToggleFlag,
    tracked: TrackedItemSet,
    consumable: FormId,
    magnitude_override: f32,
    bulk_patch_on_toggle: bool,
}

impl HotkeyRouter {
    pub fn new(config: &RuntimeConfig, flag: ToggleFlag) -> Self {
        Self {
            keys: config.keys,
            flag,
            tracked: config.tracked,
            consumable: config.consumable,
            magnitude_override: config.magnitude_override,
            bulk_patch_on_toggle: config.bulk_patch_on_toggle,
        }
    }

    pub fn toggle_enabled(&self) -> bool {
        self.flag.is_enabled()
    }

    fn handle_toggle(&mut self, host: &mut dyn WorldHost) {
        let enabled = self.flag.flip();
        let message = format!(
            "enchant removing {}",
            if enabled { "enabled" } else { "disabled" }
        );
        info!(target: "patch_runtime::input", enabled, "toggle flipped");
        host.notify(&message);

        actions::grant_outfit_templates(host, &self.tracked);

        if self.bulk_patch_on_toggle {
            actions::bulk_patch_player(host, &self.tracked);
        }
    }
}

impl InputSink for HotkeyRouter {
    fn on_input(&mut self, host: &mut dyn WorldHost, batch: &InputBatch) -> EventControl {
        if !host.simulation_active() {
            trace!(target: "patch_runtime::input", "simulation inactive, ignoring batch");
            return EventControl::Continue;
        }

        for event in &batch.events {
            if event.state != ButtonState::Pressed {
                continue;
            }

            match event.code {
                code if code == self.keys.grant => {
                    if let Err(error) =
                        actions::grant_consumable(host, self.consumable, self.magnitude_override)
                    {
                        warn!(target: "patch_runtime::input", %error, "consumable grant failed");
                    }
                }
                code if code == self.keys.toggle => self.handle_toggle(host),
                _ => {}
            }
        }

        EventControl::Continue
    }
}
