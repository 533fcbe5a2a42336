//! Capability traits the host simulation must provide.
//!
//! The host owns all actor, item, and world state; the engine only reaches
//! it through the narrow interfaces below. Each trait covers one concern so
//! test doubles and partial hosts stay cheap to write:
//! - [`FormOracle`] resolves stable identifiers to typed handles
//! - [`ActorOracle`] exposes the player actor and its inventory data
//! - [`Notifier`] delivers one-way, user-visible transient messages
//!
//! [`WorldHost`] bundles the three for callback signatures. Handles are
//! borrowed for the duration of one callback only and never retained.

mod error;

pub use error::HostError;

use std::fmt;

use patch_core::{FormId, FormKind, InventoryChanges};

/// Opaque handle to a live actor. May become invalid at any time after the
/// callback that produced it returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolved armor definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmorHandle {
    pub id: FormId,
    /// Template armor this piece was derived from, if any.
    pub template: Option<FormId>,
}

/// Resolved alchemy definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlchemyHandle {
    pub id: FormId,
    /// Number of magic effects carried by the definition.
    pub effects: usize,
}

/// Typed result of a form resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormHandle {
    Armor(ArmorHandle),
    Alchemy(AlchemyHandle),
    Other(FormKind),
}

impl FormHandle {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Armor(_) => FormKind::Armor,
            Self::Alchemy(_) => FormKind::AlchemyItem,
            Self::Other(kind) => *kind,
        }
    }
}

/// Identifier resolution against the host's form database.
///
/// The kind check happens inside the resolver: callers ask for the type
/// they need and get a typed handle or an error, never a raw kind tag to
/// interpret themselves.
pub trait FormOracle {
    /// Resolves an identifier to a live definition, or `None` if the form
    /// does not currently exist.
    fn resolve(&self, id: FormId) -> Option<FormHandle>;

    fn resolve_armor(&self, id: FormId) -> Result<ArmorHandle, HostError> {
        match self.resolve(id) {
            Some(FormHandle::Armor(armor)) => Ok(armor),
            Some(other) => Err(HostError::WrongKind {
                id,
                expected: FormKind::Armor,
                actual: other.kind(),
            }),
            None => Err(HostError::FormNotFound(id)),
        }
    }

    fn resolve_alchemy(&self, id: FormId) -> Result<AlchemyHandle, HostError> {
        match self.resolve(id) {
            Some(FormHandle::Alchemy(alchemy)) => Ok(alchemy),
            Some(other) => Err(HostError::WrongKind {
                id,
                expected: FormKind::AlchemyItem,
                actual: other.kind(),
            }),
            None => Err(HostError::FormNotFound(id)),
        }
    }
}

/// Access to the player actor and its live inventory data.
pub trait ActorOracle {
    /// The player-controlled actor, if one currently exists.
    fn player(&self) -> Option<ActorId>;

    /// Re-resolves a live actor handle to its current kind.
    ///
    /// Returns `None` when the handle no longer points at a live actor.
    fn actor_kind(&self, actor: ActorId) -> Option<FormKind>;

    /// Mutable view of the actor's inventory-change data, if present.
    ///
    /// The borrow must not outlive the current callback.
    fn inventory_changes_mut(&mut self, actor: ActorId) -> Option<&mut InventoryChanges>;

    /// Adds `count` units of a form to the actor's inventory.
    fn add_item(&mut self, actor: ActorId, item: FormId, count: u32) -> Result<(), HostError>;

    /// Forces the magnitude of a definition's first magic effect.
    ///
    /// This mutates the shared definition, not a per-instance copy: every
    /// future instance of the item is affected process-wide. Debug-only.
    fn set_first_effect_magnitude(&mut self, item: FormId, magnitude: f32)
    -> Result<(), HostError>;

    /// Clears an enchantable definition's base enchantment reference and
    /// zeroes its enchantment amount. Shared-definition mutation, like
    /// [`ActorOracle::set_first_effect_magnitude`].
    fn clear_base_enchantment(&mut self, item: FormId) -> Result<(), HostError>;

    /// Whether the host reports its simulation as active. Input handling
    /// is a no-op while this is false.
    fn simulation_active(&self) -> bool;
}

/// One-way, fire-and-forget user-visible notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Everything the event handlers need from the host, in one bound.
pub trait WorldHost: FormOracle + ActorOracle + Notifier {}

impl<T: FormOracle + ActorOracle + Notifier> WorldHost for T {}
