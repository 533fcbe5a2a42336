//! Event types and listener interfaces.
//!
//! The host emits two independent event streams (raw input, equip changes)
//! plus a lifecycle message channel. Each stream gets its own sink trait;
//! there is deliberately no shared base between them — a sink takes exactly
//! the event-and-source types it needs.
//!
//! Handlers run synchronously on the host's callback thread, never block,
//! and always hand control back with [`EventControl::Continue`] so the
//! host's own pipeline is never disrupted.

pub mod equip;
pub mod input;

pub use equip::{EquipPatchMode, EquipPatchSink};
pub use input::HotkeyRouter;

use patch_core::{FormId, FormKind};

use crate::host::{ActorId, WorldHost};

/// Signal handed back to the host after every callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventControl {
    /// Keep delivering events to downstream sinks.
    Continue,
    /// Stop event propagation. The engine never returns this.
    Stop,
}

/// Transition state of one button event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
    Repeat,
}

/// One button event inside a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonEvent {
    pub code: u32,
    pub state: ButtonState,
}

impl ButtonEvent {
    pub fn pressed(code: u32) -> Self {
        Self {
            code,
            state: ButtonState::Pressed,
        }
    }
}

/// A chain of button events delivered in one host callback, in the order
/// the host linked them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBatch {
    pub events: Vec<ButtonEvent>,
}

impl InputBatch {
    pub fn new(events: Vec<ButtonEvent>) -> Self {
        Self { events }
    }
}

/// The acting entity of an equip event, as the host reported it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorRef {
    pub id: ActorId,
    pub kind: FormKind,
}

/// Host notification that an actor equipped or unequipped an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipEvent {
    /// Acting entity; the host may emit events without one.
    pub actor: Option<ActorRef>,
    /// Identifier of the equipped/unequipped base object.
    pub base_object: FormId,
    pub equipped: bool,
}

/// Milestones on the host's lifecycle message channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleMessage {
    /// The input subsystem is ready; input sinks may subscribe.
    InputReady,
    /// World data finished loading; equip sinks may subscribe.
    DataLoaded,
    /// A save was loaded into the running simulation.
    SaveLoaded,
    /// A new simulation was started.
    NewGame,
    /// Any milestone the engine does not react to.
    Other(u32),
}

/// Listener on the host's raw input event source.
pub trait InputSink {
    fn on_input(&mut self, host: &mut dyn WorldHost, batch: &InputBatch) -> EventControl;
}

/// Listener on the host's equip-change event source.
pub trait EquipSink {
    fn on_equip(&mut self, host: &mut dyn WorldHost, event: &EquipEvent) -> EventControl;
}
