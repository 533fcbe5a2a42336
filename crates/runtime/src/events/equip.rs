//! Equip-change listener: filter gates plus the scan-and-patch pass.

use tracing::{debug, info, trace};

use patch_core::{FormKind, TrackedItemSet};

use crate::host::WorldHost;
use crate::scan;

use super::{EquipEvent, EquipSink, EventControl};

/// Whether equip events trigger a patch pass at all.
///
/// `Disabled` is the shipped default; the equip-triggered pass is switched
/// on per installation, not hardcoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum EquipPatchMode {
    #[default]
    Disabled,
    Enabled,
}

/// Sink on the equip-change event source.
///
/// Decides relevance through four short-circuiting gates, each failing
/// closed: the engine hands [`EventControl::Continue`] back to the host no
/// matter which gate bails.
pub struct EquipPatchSink {
    mode: EquipPatchMode,
    tracked: TrackedItemSet,
}

impl EquipPatchSink {
    pub fn new(mode: EquipPatchMode, tracked: TrackedItemSet) -> Self {
        Self { mode, tracked }
    }

    pub fn mode(&self) -> EquipPatchMode {
        self.mode
    }
}

impl EquipSink for EquipPatchSink {
    fn on_equip(&mut self, host: &mut dyn WorldHost, event: &EquipEvent) -> EventControl {
        if self.mode == EquipPatchMode::Disabled {
            trace!(target: "patch_runtime::equip", "equip patching disabled");
            return EventControl::Continue;
        }

        // Gate 1: the event must carry a live player-character actor.
        let Some(actor) = event.actor else {
            debug!(target: "patch_runtime::equip", "no acting entity on event");
            return EventControl::Continue;
        };
        if actor.kind != FormKind::ActorCharacter {
            debug!(
                target: "patch_runtime::equip",
                kind = %actor.kind,
                "acting entity is not a character"
            );
            return EventControl::Continue;
        }

        // Gate 2: the base object must resolve to a live armor definition.
        match host.resolve(event.base_object) {
            Some(handle) if handle.kind() == FormKind::Armor => {}
            resolved => {
                debug!(
                    target: "patch_runtime::equip",
                    base_object = %event.base_object,
                    found = resolved.is_some(),
                    "base object is not live armor"
                );
                return EventControl::Continue;
            }
        }

        // Gate 3: re-resolving the actor handle must still yield a character.
        match host.actor_kind(actor.id) {
            Some(FormKind::ActorCharacter) => {}
            _ => {
                debug!(
                    target: "patch_runtime::equip",
                    actor = %actor.id,
                    "actor handle no longer resolves to a character"
                );
                return EventControl::Continue;
            }
        }

        // Gate 4: inventory-change data and its entry list must be present.
        let Some(changes) = host.inventory_changes_mut(actor.id) else {
            debug!(target: "patch_runtime::equip", actor = %actor.id, "no inventory changes");
            return EventControl::Continue;
        };
        if changes.entries.is_none() {
            debug!(target: "patch_runtime::equip", actor = %actor.id, "no entry list");
            return EventControl::Continue;
        }

        let summary = scan::scan_and_patch(changes, &self.tracked);
        info!(
            target: "patch_runtime::equip",
            actor = %actor.id,
            base_object = %event.base_object,
            equipped = event.equipped,
            patched = summary.entries_patched,
            enchantments = summary.enchantments_removed,
            charges = summary.charges_removed,
            "equip-triggered patch pass finished"
        );

        EventControl::Continue
    }
}
