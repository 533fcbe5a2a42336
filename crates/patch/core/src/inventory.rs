//! Inventory entries and change data as the engine sees them.
//!
//! The host owns the live structures; these types model exactly the shape
//! the engine needs: one entry per distinct stack, each with an optional
//! item-object reference and zero or more per-instance extra-data lists.

use crate::extra::ExtraDataList;
use crate::form::{FormId, FormKind};

/// Reference to an item's static definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemObject {
    pub id: FormId,
    pub kind: FormKind,
    pub name: String,
}

impl ItemObject {
    pub fn new(id: FormId, kind: FormKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
        }
    }
}

/// One distinct stack of an item type held by an actor.
///
/// An entry with no object reference is invalid and is skipped by every
/// pass; an entry with no extra-data lists carries no per-instance state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryEntry {
    pub object: Option<ItemObject>,
    pub extra_lists: Option<Vec<ExtraDataList>>,
}

impl InventoryEntry {
    pub fn new(object: ItemObject) -> Self {
        Self {
            object: Some(object),
            extra_lists: None,
        }
    }

    pub fn with_extra_lists(mut self, lists: Vec<ExtraDataList>) -> Self {
        self.extra_lists = Some(lists);
        self
    }

    /// Display label derived from the object reference, never stored.
    pub fn display_name(&self) -> &str {
        self.object
            .as_ref()
            .map(|object| object.name.as_str())
            .unwrap_or("<bad entry>")
    }
}

/// The actor's inventory-change data.
///
/// Both layers are optional to mirror the host: change data may be absent
/// for an actor, and present change data may still lack an entry list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryChanges {
    pub entries: Option<Vec<InventoryEntry>>,
}

impl InventoryChanges {
    pub fn new(entries: Vec<InventoryEntry>) -> Self {
        Self {
            entries: Some(entries),
        }
    }
}
