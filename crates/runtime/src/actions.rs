//! One-shot actions fired by the hotkey router.
//!
//! Every action follows the same failure policy: fallible lookups are
//! checked immediately, a failure emits a diagnostic and the action unwinds
//! having performed no mutation. Nothing is retried — an absent form or
//! actor is a transient condition the engine tolerates.

use tracing::{debug, info, warn};

use patch_core::{FormId, TrackedItemSet};

use crate::host::{FormHandle, HostError, WorldHost};
use crate::scan::{self, PatchSummary};

/// Grants one unit of the tracked consumable to the player.
///
/// Before the grant, the consumable's first magic effect is forced to
/// `magnitude`. That override lands on the shared definition — every
/// future instance is affected — which is acceptable only because this is
/// a debug action.
pub fn grant_consumable(
    host: &mut dyn WorldHost,
    item: FormId,
    magnitude: f32,
) -> Result<(), HostError> {
    let player = host.player().ok_or(HostError::PlayerNotFound)?;
    let handle = host.resolve_alchemy(item)?;

    if handle.effects > 0 {
        host.set_first_effect_magnitude(item, magnitude)?;
        info!(target: "patch_runtime::actions", %item, magnitude, "effect magnitude forced");
    } else {
        debug!(target: "patch_runtime::actions", %item, "consumable has no effects");
    }

    host.add_item(player, item, 1)?;
    host.notify("Consumable added");
    Ok(())
}

/// Grants the template armor behind each tracked piece to the player.
///
/// A piece without a template reference, or one that does not resolve to
/// armor at all, is reported and skipped; the loop never aborts.
pub fn grant_outfit_templates(host: &mut dyn WorldHost, tracked: &TrackedItemSet) {
    let Some(player) = host.player() else {
        warn!(target: "patch_runtime::actions", "player not found, skipping template grants");
        return;
    };

    for piece in tracked.iter() {
        match host.resolve(piece) {
            Some(FormHandle::Armor(armor)) => match armor.template {
                Some(template) => {
                    if let Err(error) = host.add_item(player, template, 1) {
                        warn!(
                            target: "patch_runtime::actions",
                            %piece,
                            %template,
                            %error,
                            "template grant failed"
                        );
                    } else {
                        debug!(target: "patch_runtime::actions", %piece, %template, "template granted");
                    }
                }
                None => host.notify("no template armor"),
            },
            _ => host.notify("no piece armor"),
        }
    }
}

/// Full patch pass over the player's inventory, including base-definition
/// enchantment clearing for tracked entries.
///
/// Only reachable when `bulk_patch_on_toggle` is configured; returns `None`
/// when the player or its change data is unavailable.
pub fn bulk_patch_player(
    host: &mut dyn WorldHost,
    tracked: &TrackedItemSet,
) -> Option<PatchSummary> {
    let Some(player) = host.player() else {
        warn!(target: "patch_runtime::actions", "player not found, skipping bulk patch");
        return None;
    };

    let tracked_present: Vec<FormId>;
    let summary = {
        let Some(changes) = host.inventory_changes_mut(player) else {
            debug!(target: "patch_runtime::actions", "no inventory changes, skipping bulk patch");
            return None;
        };
        tracked_present = changes
            .entries
            .as_deref()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.object.as_ref())
                    .map(|object| object.id)
                    .filter(|id| tracked.contains(*id))
                    .collect()
            })
            .unwrap_or_default();
        scan::scan_and_patch(changes, tracked)
    };

    for id in tracked_present {
        if let Err(error) = host.clear_base_enchantment(id) {
            debug!(target: "patch_runtime::actions", %id, %error, "base enchantment not cleared");
        }
    }

    info!(
        target: "patch_runtime::actions",
        patched = summary.entries_patched,
        enchantments = summary.enchantments_removed,
        charges = summary.charges_removed,
        "bulk patch pass finished"
    );
    Some(summary)
}
