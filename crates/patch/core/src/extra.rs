//! Per-instance extra-data records and the lists that carry them.
//!
//! Every physically distinct instance inside an inventory stack can carry a
//! bag of typed records (an enchantment, a remaining charge, arbitrary host
//! annotations). Lookup and removal follow the host's GetByType semantics:
//! first match wins, at most one record of a kind is touched per call.

use crate::form::FormId;

/// Kind tag used for lookup and removal.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ExtraDataKind {
    Enchantment,
    Charge,
    Custom,
}

/// One typed record attached to an item instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtraData {
    /// An applied enchantment referencing a magic-effect form.
    Enchantment { effect: FormId },
    /// Remaining charge level of an enchanted instance.
    Charge { level: u16 },
    /// Any record kind the engine must leave untouched.
    Custom { tag: u32 },
}

impl ExtraData {
    pub fn kind(&self) -> ExtraDataKind {
        match self {
            Self::Enchantment { .. } => ExtraDataKind::Enchantment,
            Self::Charge { .. } => ExtraDataKind::Charge,
            Self::Custom { .. } => ExtraDataKind::Custom,
        }
    }
}

/// Unordered bag of records belonging to one physical instance.
///
/// The host owns the real list; this type is the engine's view of it, and
/// the runtime mutates it in place during a patch pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtraDataList {
    records: Vec<ExtraData>,
}

impl ExtraDataList {
    pub fn new(records: Vec<ExtraData>) -> Self {
        Self { records }
    }

    /// First record of the given kind, if any.
    pub fn get(&self, kind: ExtraDataKind) -> Option<&ExtraData> {
        self.records.iter().find(|record| record.kind() == kind)
    }

    /// Removes the first record of the given kind and returns it.
    ///
    /// Absence is not an error; the list is left as found.
    pub fn remove(&mut self, kind: ExtraDataKind) -> Option<ExtraData> {
        let index = self.records.iter().position(|r| r.kind() == kind)?;
        Some(self.records.remove(index))
    }

    pub fn push(&mut self, record: ExtraData) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ExtraData] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl From<Vec<ExtraData>> for ExtraDataList {
    fn from(records: Vec<ExtraData>) -> Self {
        Self::new(records)
    }
}
