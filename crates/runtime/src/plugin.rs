//! Composition root for an embedding shim.
//!
//! The shim that actually lives inside the host process owns a [`Plugin`]
//! and forwards the host's raw callbacks: lifecycle messages into
//! [`Plugin::handle_message`], input batches into [`Plugin::handle_input`],
//! and equip events into [`Plugin::handle_equip`]. Everything else — sink
//! construction, flag ownership, configuration — happens here.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::RuntimeConfig;
use crate::dispatch::Dispatcher;
use crate::events::{
    EquipEvent, EquipPatchSink, EventControl, HotkeyRouter, InputBatch, LifecycleMessage,
};
use crate::host::WorldHost;
use crate::toggle::ToggleFlag;

pub struct Plugin {
    dispatcher: Dispatcher,
}

impl Plugin {
    pub fn new(config: RuntimeConfig) -> Self {
        let router = HotkeyRouter::new(&config, ToggleFlag::default());
        let equip = EquipPatchSink::new(config.equip_patch, config.tracked);

        Self {
            dispatcher: Dispatcher::new(router, equip),
        }
    }

    pub fn handle_message(&mut self, message: LifecycleMessage) {
        self.dispatcher.on_message(message);
    }

    pub fn handle_input(&mut self, host: &mut dyn WorldHost, batch: &InputBatch) -> EventControl {
        self.dispatcher.dispatch_input(host, batch)
    }

    pub fn handle_equip(&mut self, host: &mut dyn WorldHost, event: &EquipEvent) -> EventControl {
        self.dispatcher.dispatch_equip(host, event)
    }

    /// Current state of the debug toggle.
    pub fn toggle_enabled(&self) -> bool {
        self.dispatcher.router().toggle_enabled()
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

/// Initializes tracing to stderr with `RUST_LOG`-style filtering.
///
/// Intended for the embedding shim's load hook; calling it twice fails,
/// so shims that already own a subscriber should skip it.
pub fn init_logging() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
