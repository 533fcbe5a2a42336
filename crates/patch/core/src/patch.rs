//! The extra-data patcher.
//!
//! Strips the two transient record kinds (enchantment, charge) from every
//! extra-data list of one inventory entry, leaving all other records
//! structurally unchanged. The caller is responsible for deciding whether
//! the entry is tracked at all; the patcher only performs the removal.

use crate::extra::ExtraDataKind;
use crate::inventory::InventoryEntry;

/// What one patch call removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Extra-data lists visited.
    pub lists: usize,
    /// Enchantment records removed.
    pub enchantments: usize,
    /// Charge records removed.
    pub charges: usize,
}

impl PatchOutcome {
    pub fn is_noop(&self) -> bool {
        self.enchantments == 0 && self.charges == 0
    }
}

/// Removes enchantment and charge records from every extra-data list of
/// `entry`.
///
/// Per list, at most one record of each kind is removed (GetByType
/// single-record semantics). An entry without extra-data lists, and a list
/// already lacking a record kind, are no-ops; neither is an error. The
/// operation is idempotent and cannot partially fail.
pub fn patch_entry(entry: &mut InventoryEntry) -> PatchOutcome {
    let mut outcome = PatchOutcome::default();

    let Some(lists) = entry.extra_lists.as_mut() else {
        return outcome;
    };

    for list in lists {
        outcome.lists += 1;
        if list.remove(ExtraDataKind::Enchantment).is_some() {
            outcome.enchantments += 1;
        }
        if list.remove(ExtraDataKind::Charge).is_some() {
            outcome.charges += 1;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extra::{ExtraData, ExtraDataKind, ExtraDataList};
    use crate::form::{FormId, FormKind};
    use crate::inventory::ItemObject;

    fn tracked_entry(lists: Vec<ExtraDataList>) -> InventoryEntry {
        InventoryEntry::new(ItemObject::new(
            FormId::new(0x000E_35D7),
            FormKind::Armor,
            "Tracked Cuirass",
        ))
        .with_extra_lists(lists)
    }

    #[test]
    fn strips_enchantment_and_charge_keeps_the_rest() {
        let mut entry = tracked_entry(vec![ExtraDataList::new(vec![
            ExtraData::Enchantment {
                effect: FormId::new(0xE1),
            },
            ExtraData::Charge { level: 5 },
            ExtraData::Custom { tag: 42 },
        ])]);

        let outcome = patch_entry(&mut entry);

        assert_eq!(outcome.lists, 1);
        assert_eq!(outcome.enchantments, 1);
        assert_eq!(outcome.charges, 1);
        let lists = entry.extra_lists.as_ref().unwrap();
        assert_eq!(lists[0].records(), &[ExtraData::Custom { tag: 42 }]);
    }

    #[test]
    fn patch_is_idempotent() {
        let mut entry = tracked_entry(vec![ExtraDataList::new(vec![
            ExtraData::Enchantment {
                effect: FormId::new(0xE1),
            },
            ExtraData::Custom { tag: 9 },
        ])]);

        let first = patch_entry(&mut entry);
        let after_first = entry.clone();
        let second = patch_entry(&mut entry);

        assert_eq!(first.enchantments, 1);
        assert!(second.is_noop());
        assert_eq!(entry, after_first);
    }

    #[test]
    fn entry_without_lists_is_a_noop() {
        let mut entry = tracked_entry(vec![]);
        entry.extra_lists = None;

        let outcome = patch_entry(&mut entry);

        assert!(outcome.is_noop());
        assert_eq!(outcome.lists, 0);
        assert!(entry.extra_lists.is_none());
    }

    #[test]
    fn every_list_of_an_entry_is_patched() {
        let mut entry = tracked_entry(vec![
            ExtraDataList::new(vec![ExtraData::Charge { level: 1 }]),
            ExtraDataList::new(vec![ExtraData::Enchantment {
                effect: FormId::new(0xE2),
            }]),
            ExtraDataList::default(),
        ]);

        let outcome = patch_entry(&mut entry);

        assert_eq!(outcome.lists, 3);
        assert_eq!(outcome.enchantments, 1);
        assert_eq!(outcome.charges, 1);
        for list in entry.extra_lists.as_ref().unwrap() {
            assert!(list.get(ExtraDataKind::Enchantment).is_none());
            assert!(list.get(ExtraDataKind::Charge).is_none());
        }
    }
}
