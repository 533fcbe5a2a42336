//! Inventory scanning: enumerate entries, patch the tracked ones.

use tracing::{debug, info, trace};

use patch_core::{InventoryChanges, TrackedItemSet, patch_entry};

/// Aggregate result of one scan-and-patch pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatchSummary {
    /// Tracked entries that went through the patcher.
    pub entries_patched: usize,
    /// Entries skipped because their identifier is not tracked.
    pub entries_skipped: usize,
    /// Entries skipped because their object reference was missing.
    pub bad_entries: usize,
    pub enchantments_removed: usize,
    pub charges_removed: usize,
}

/// Walks every inventory entry in host order and patches the tracked ones.
///
/// The pass is a read-only view over the entry list itself: no entry is
/// created, removed, or reordered — only the matching entries' extra-data
/// lists are mutated in place. Change data without an entry list yields an
/// empty summary.
pub fn scan_and_patch(changes: &mut InventoryChanges, tracked: &TrackedItemSet) -> PatchSummary {
    let mut summary = PatchSummary::default();

    let Some(entries) = changes.entries.as_mut() else {
        return summary;
    };

    for entry in entries.iter_mut() {
        let Some(object) = entry.object.as_ref() else {
            info!(target: "patch_runtime::scan", "entry without object reference, skipping");
            summary.bad_entries += 1;
            continue;
        };

        if !tracked.contains(object.id) {
            trace!(
                target: "patch_runtime::scan",
                id = %object.id,
                name = entry.display_name(),
                "not tracked, skipping"
            );
            summary.entries_skipped += 1;
            continue;
        }

        debug!(
            target: "patch_runtime::scan",
            id = %object.id,
            name = entry.display_name(),
            "patching tracked entry"
        );

        let outcome = patch_entry(entry);
        if outcome.lists == 0 {
            debug!(target: "patch_runtime::scan", name = entry.display_name(), "no extra data");
        }
        summary.entries_patched += 1;
        summary.enchantments_removed += outcome.enchantments;
        summary.charges_removed += outcome.charges;
    }

    summary
}
