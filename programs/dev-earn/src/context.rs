//! Per-transition execution context.

use crate::{events::EventManager, store::KvStore};

/// Everything a keeper operation touches besides its collaborators: the
/// module's store, the event sink, and the height of the block being
/// processed.
pub struct Context<'a> {
    store: &'a mut (dyn KvStore + 'a),
    event_manager: EventManager,
    block_height: u64,
}

impl<'a> Context<'a> {
    pub fn new(store: &'a mut (dyn KvStore + 'a), block_height: u64) -> Self {
        Self {
            store,
            event_manager: EventManager::default(),
            block_height,
        }
    }

    pub fn store(&self) -> &dyn KvStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut (dyn KvStore + 'a) {
        &mut *self.store
    }

    pub fn event_manager(&self) -> &EventManager {
        &self.event_manager
    }

    pub fn event_manager_mut(&mut self) -> &mut EventManager {
        &mut self.event_manager
    }

    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    pub fn into_events(self) -> Vec<crate::events::Event> {
        self.event_manager.into_events()
    }
}
