//! Lifecycle arming: no sink receives events before its milestone.

mod common;

use common::{FakeWorld, PLAYER};

use patch_core::{FormId, FormKind, PatchConfig};
use patch_runtime::config::RuntimeConfig;
use patch_runtime::events::{
    ActorRef, ButtonEvent, EquipEvent, EquipPatchMode, EventControl, InputBatch, LifecycleMessage,
};
use patch_runtime::plugin::Plugin;

const CONSUMABLE: FormId = PatchConfig::TRACKED_CONSUMABLE;

fn equip_event() -> EquipEvent {
    EquipEvent {
        actor: Some(ActorRef {
            id: PLAYER,
            kind: FormKind::ActorCharacter,
        }),
        base_object: FormId::new(0x1234),
        equipped: true,
    }
}

#[test]
fn input_events_are_dropped_until_input_ready() {
    let mut world = FakeWorld::new();
    world.insert_alchemy(CONSUMABLE, 1);
    let mut plugin = Plugin::default();
    let batch = InputBatch::new(vec![ButtonEvent::pressed(PatchConfig::KEY_GRANT)]);

    assert_eq!(
        plugin.handle_input(&mut world, &batch),
        EventControl::Continue
    );
    assert!(world.granted.is_empty());

    plugin.handle_message(LifecycleMessage::InputReady);
    plugin.handle_input(&mut world, &batch);
    assert_eq!(world.granted, vec![(PLAYER, CONSUMABLE, 1)]);
}

#[test]
fn equip_events_are_dropped_until_data_loaded() {
    let mut world = FakeWorld::new();
    world.insert_armor(FormId::new(0x1234), None);
    let config = RuntimeConfig {
        equip_patch: EquipPatchMode::Enabled,
        ..RuntimeConfig::default()
    };
    let mut plugin = Plugin::new(config);

    plugin.handle_equip(&mut world, &equip_event());
    assert!(world.resolve_log.borrow().is_empty());

    plugin.handle_message(LifecycleMessage::DataLoaded);
    plugin.handle_equip(&mut world, &equip_event());
    assert_eq!(world.resolve_log.borrow().clone(), vec![FormId::new(0x1234)]);
}

#[test]
fn unrelated_milestones_arm_nothing() {
    let mut world = FakeWorld::new();
    world.insert_alchemy(CONSUMABLE, 1);
    let mut plugin = Plugin::default();

    plugin.handle_message(LifecycleMessage::NewGame);
    plugin.handle_message(LifecycleMessage::SaveLoaded);
    plugin.handle_message(LifecycleMessage::Other(12));

    let batch = InputBatch::new(vec![ButtonEvent::pressed(PatchConfig::KEY_GRANT)]);
    plugin.handle_input(&mut world, &batch);
    assert!(world.granted.is_empty());
}

#[test]
fn re_arming_is_idempotent() {
    let mut world = FakeWorld::new();
    world.insert_alchemy(CONSUMABLE, 1);
    let mut plugin = Plugin::default();

    plugin.handle_message(LifecycleMessage::InputReady);
    plugin.handle_message(LifecycleMessage::InputReady);

    let batch = InputBatch::new(vec![ButtonEvent::pressed(PatchConfig::KEY_GRANT)]);
    plugin.handle_input(&mut world, &batch);
    assert_eq!(world.granted.len(), 1);
}

#[test]
fn toggle_state_is_observable_through_the_plugin() {
    let mut world = FakeWorld::new();
    let mut plugin = Plugin::default();
    plugin.handle_message(LifecycleMessage::InputReady);

    assert!(!plugin.toggle_enabled());
    let batch = InputBatch::new(vec![ButtonEvent::pressed(PatchConfig::KEY_TOGGLE)]);
    plugin.handle_input(&mut world, &batch);
    assert!(plugin.toggle_enabled());
    plugin.handle_input(&mut world, &batch);
    assert!(!plugin.toggle_enabled());
}
