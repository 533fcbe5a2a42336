//! Event-driven inventory patching on top of an abstract host simulation.
//!
//! This crate wires the pure types from `patch-core` to a live host: it
//! defines the capability traits the host must provide, the two event sink
//! implementations, and the dispatcher that arms them on lifecycle
//! milestones. Consumers embed [`Plugin`] and forward host callbacks into
//! it.
//!
//! Modules are organized by responsibility:
//! - [`host`] declares the capability traits and typed handles
//! - [`events`] holds event types, sink traits, and both sinks
//! - [`scan`] walks inventory entries and applies the patcher
//! - [`actions`] implements the one-shot hotkey actions
//! - [`dispatch`] arms sinks on lifecycle messages and forwards events
//! - [`config`] carries the runtime switches and the RON loader
//! - [`plugin`] is the composition root an embedding shim drives
pub mod actions;
pub mod config;
pub mod dispatch;
pub mod events;
pub mod host;
pub mod plugin;
pub mod scan;
pub mod toggle;

pub use config::{ConfigError, KeyBindings, RuntimeConfig};
pub use dispatch::Dispatcher;
pub use events::{
    ActorRef, ButtonEvent, ButtonState, EquipEvent, EquipPatchMode, EquipPatchSink, EquipSink,
    EventControl, HotkeyRouter, InputBatch, InputSink, LifecycleMessage,
};
pub use host::{
    ActorId, AlchemyHandle, ArmorHandle, FormHandle, FormOracle, ActorOracle, HostError, Notifier,
    WorldHost,
};
pub use plugin::{Plugin, init_logging};
pub use scan::{PatchSummary, scan_and_patch};
pub use toggle::ToggleFlag;
