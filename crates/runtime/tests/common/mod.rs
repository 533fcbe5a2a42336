//! In-memory host double shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use patch_core::{FormId, FormKind, InventoryChanges, InventoryEntry};
use patch_runtime::host::{
    ActorId, ActorOracle, AlchemyHandle, ArmorHandle, FormHandle, FormOracle, HostError, Notifier,
};

pub const PLAYER: ActorId = ActorId(0);

/// Fake world simulation backing the capability traits with hash maps.
pub struct FakeWorld {
    forms: HashMap<FormId, FormHandle>,
    player: Option<ActorId>,
    actors: HashMap<ActorId, FormKind>,
    changes: HashMap<ActorId, InventoryChanges>,
    pub active: bool,
    pub granted: Vec<(ActorId, FormId, u32)>,
    pub magnitude_overrides: Vec<(FormId, f32)>,
    pub cleared_enchantments: Vec<FormId>,
    pub notifications: RefCell<Vec<String>>,
    /// Every identifier handed to `resolve`, in call order.
    pub resolve_log: RefCell<Vec<FormId>>,
}

impl FakeWorld {
    /// World with a live player character and an active simulation.
    pub fn new() -> Self {
        let mut actors = HashMap::new();
        actors.insert(PLAYER, FormKind::ActorCharacter);
        Self {
            forms: HashMap::new(),
            player: Some(PLAYER),
            actors,
            changes: HashMap::new(),
            active: true,
            granted: Vec::new(),
            magnitude_overrides: Vec::new(),
            cleared_enchantments: Vec::new(),
            notifications: RefCell::new(Vec::new()),
            resolve_log: RefCell::new(Vec::new()),
        }
    }

    pub fn without_player(mut self) -> Self {
        self.player = None;
        self.actors.clear();
        self
    }

    pub fn insert_armor(&mut self, id: FormId, template: Option<FormId>) {
        self.forms
            .insert(id, FormHandle::Armor(ArmorHandle { id, template }));
    }

    pub fn insert_alchemy(&mut self, id: FormId, effects: usize) {
        self.forms
            .insert(id, FormHandle::Alchemy(AlchemyHandle { id, effects }));
    }

    pub fn insert_other(&mut self, id: FormId, kind: FormKind) {
        self.forms.insert(id, FormHandle::Other(kind));
    }

    pub fn set_entries(&mut self, actor: ActorId, entries: Vec<InventoryEntry>) {
        self.changes.insert(actor, InventoryChanges::new(entries));
    }

    pub fn set_changes(&mut self, actor: ActorId, changes: InventoryChanges) {
        self.changes.insert(actor, changes);
    }

    pub fn entries(&self, actor: ActorId) -> &[InventoryEntry] {
        self.changes
            .get(&actor)
            .and_then(|changes| changes.entries.as_deref())
            .unwrap_or(&[])
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }
}

impl FormOracle for FakeWorld {
    fn resolve(&self, id: FormId) -> Option<FormHandle> {
        self.resolve_log.borrow_mut().push(id);
        self.forms.get(&id).copied()
    }
}

impl ActorOracle for FakeWorld {
    fn player(&self) -> Option<ActorId> {
        self.player
    }

    fn actor_kind(&self, actor: ActorId) -> Option<FormKind> {
        self.actors.get(&actor).copied()
    }

    fn inventory_changes_mut(&mut self, actor: ActorId) -> Option<&mut InventoryChanges> {
        self.changes.get_mut(&actor)
    }

    fn add_item(&mut self, actor: ActorId, item: FormId, count: u32) -> Result<(), HostError> {
        if !self.actors.contains_key(&actor) {
            return Err(HostError::ActorNotFound(actor));
        }
        self.granted.push((actor, item, count));
        Ok(())
    }

    fn set_first_effect_magnitude(
        &mut self,
        item: FormId,
        magnitude: f32,
    ) -> Result<(), HostError> {
        match self.forms.get(&item) {
            Some(FormHandle::Alchemy(handle)) if handle.effects == 0 => {
                Err(HostError::NoEffects(item))
            }
            Some(_) => {
                self.magnitude_overrides.push((item, magnitude));
                Ok(())
            }
            None => Err(HostError::FormNotFound(item)),
        }
    }

    fn clear_base_enchantment(&mut self, item: FormId) -> Result<(), HostError> {
        if !self.forms.contains_key(&item) {
            return Err(HostError::FormNotFound(item));
        }
        self.cleared_enchantments.push(item);
        Ok(())
    }

    fn simulation_active(&self) -> bool {
        self.active
    }
}

impl Notifier for FakeWorld {
    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }
}
