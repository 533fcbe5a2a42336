//! Identifiers and kind tags mirrored from the host's form database.

use std::fmt;

/// Stable identifier the host assigns to every form (item definition,
/// actor base, magic effect, ...).
///
/// The engine never interprets the value; it only compares it against the
/// tracked configuration and hands it back to the host for resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormId(pub u32);

impl FormId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Kind tag of a resolved form.
///
/// Only the three kinds the engine actually checks get their own variant;
/// everything else the host can report is folded into [`FormKind::Other`]
/// with the host's raw kind tag preserved for diagnostics.
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
pub enum FormKind {
    /// A playable character actor.
    ActorCharacter,
    /// A wearable armor definition.
    Armor,
    /// A consumable alchemy definition (potions and the like).
    AlchemyItem,
    /// Any kind this engine never inspects, with the host's raw tag.
    Other(u16),
}
