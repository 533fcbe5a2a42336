//! Registration of the two sinks on the host's event sources.
//!
//! The host announces readiness of its subsystems over a lifecycle message
//! channel; a sink must not receive events before its source exists. The
//! dispatcher holds both sinks from construction and arms each one when the
//! matching milestone arrives, mirroring how the host's own registration
//! API behaves.

use tracing::{debug, info};

use crate::events::{
    EquipEvent, EquipPatchSink, EquipSink, EventControl, HotkeyRouter, InputBatch, InputSink,
    LifecycleMessage,
};
use crate::host::WorldHost;

pub struct Dispatcher {
    input: HotkeyRouter,
    equip: EquipPatchSink,
    input_armed: bool,
    equip_armed: bool,
}

impl Dispatcher {
    pub fn new(input: HotkeyRouter, equip: EquipPatchSink) -> Self {
        Self {
            input,
            equip,
            input_armed: false,
            equip_armed: false,
        }
    }

    /// Arms sinks on their lifecycle milestones. Re-arming is idempotent.
    pub fn on_message(&mut self, message: LifecycleMessage) {
        match message {
            LifecycleMessage::InputReady => {
                if self.input_armed {
                    debug!(target: "patch_runtime::dispatch", "input sink already registered");
                } else {
                    self.input_armed = true;
                    info!(target: "patch_runtime::dispatch", "registered input event sink");
                }
            }
            LifecycleMessage::DataLoaded => {
                if self.equip_armed {
                    debug!(target: "patch_runtime::dispatch", "equip sink already registered");
                } else {
                    self.equip_armed = true;
                    info!(target: "patch_runtime::dispatch", "registered equip event sink");
                }
            }
            other => {
                debug!(target: "patch_runtime::dispatch", ?other, "lifecycle message ignored");
            }
        }
    }

    pub fn dispatch_input(&mut self, host: &mut dyn WorldHost, batch: &InputBatch) -> EventControl {
        if !self.input_armed {
            return EventControl::Continue;
        }
        self.input.on_input(host, batch)
    }

    pub fn dispatch_equip(&mut self, host: &mut dyn WorldHost, event: &EquipEvent) -> EventControl {
        if !self.equip_armed {
            return EventControl::Continue;
        }
        self.equip.on_equip(host, event)
    }

    pub fn input_armed(&self) -> bool {
        self.input_armed
    }

    pub fn equip_armed(&self) -> bool {
        self.equip_armed
    }

    pub fn router(&self) -> &HotkeyRouter {
        &self.input
    }
}
