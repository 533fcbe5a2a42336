//! Pure data model and patch logic for the inventory patch engine.
//!
//! `patch-core` defines the identifier and record types mirrored from the
//! host simulation (forms, extra-data records, inventory entries) and the
//! patcher that strips transient modifiers from tracked items. Everything
//! here is synchronous, allocation-light, and host-agnostic; the runtime
//! crate layers host access and event dispatch on top of the types
//! re-exported here.
pub mod config;
pub mod extra;
pub mod form;
pub mod inventory;
pub mod patch;
pub mod tracked;

pub use config::PatchConfig;
pub use extra::{ExtraData, ExtraDataKind, ExtraDataList};
pub use form::{FormId, FormKind};
pub use inventory::{InventoryChanges, InventoryEntry, ItemObject};
pub use patch::{PatchOutcome, patch_entry};
pub use tracked::TrackedItemSet;
