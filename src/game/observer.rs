//! Game state observers.
//!
//! The state keeps only `Weak` handles: an observer stays registered until it
//! is removed explicitly or its last `Rc` is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info};
use uuid::Uuid;

use crate::game::types::GameItem;

/// Receives notifications about game state events.
pub trait GameStateObserver {
    fn unit_destroyed(&self, _unit: &GameItem) {}
}

/// Handle returned on registration, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Observers in registration order.
#[derive(Default)]
pub struct ObserverList {
    next_id: u64,
    entries: Vec<(ObserverId, Weak<dyn GameStateObserver>)>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<O: GameStateObserver + 'static>(&mut self, observer: &Rc<O>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        let weak: Weak<dyn GameStateObserver> = Rc::downgrade(observer) as Weak<dyn GameStateObserver>;
        self.entries.push((id, weak));
        debug!("[Observers] Registered observer {:?} ({} total)", id, self.entries.len());
        id
    }

    /// Returns false when `id` was not registered.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!("[Observers] Unregistered observer {:?}", id);
        }
        removed
    }

    /// Number of registered observers whose owner is still alive.
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|(_, weak)| weak.strong_count() > 0).count()
    }

    /// Call `f` on every live observer in registration order, pruning dropped ones.
    pub fn for_each<F: FnMut(&dyn GameStateObserver)>(&mut self, mut f: F) {
        self.entries.retain(|(id, weak)| match weak.upgrade() {
            Some(observer) => {
                f(observer.as_ref());
                true
            }
            None => {
                debug!("[Observers] Pruned dropped observer {:?}", id);
                false
            }
        });
    }
}

/// Observer that logs destroyed units and remembers their ids.
#[derive(Default)]
pub struct DestroyedUnitsLog {
    destroyed: RefCell<Vec<Uuid>>,
}

impl DestroyedUnitsLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destroyed(&self) -> Vec<Uuid> {
        self.destroyed.borrow().clone()
    }
}

impl GameStateObserver for DestroyedUnitsLog {
    fn unit_destroyed(&self, unit: &GameItem) {
        info!(
            "[GameState] Unit {} destroyed at ({}, {})",
            unit.id, unit.position.x, unit.position.y
        );
        self.destroyed.borrow_mut().push(unit.id);
    }
}
