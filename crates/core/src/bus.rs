//! Event bus - synchronous, typed publish/subscribe.
//!
//! The bus decouples the state manager's mutations from reactive consumers
//! (renderer, HUD, speed policy). Events are keyed by [`EventKind`], a closed
//! enumeration, so there are no stringly-typed subscriptions.
//!
//! Everything is single-threaded: handlers run synchronously, in registration
//! order, inside the publishing call stack. `publish` snapshots the handler
//! list before invoking anything, so a handler may subscribe, unsubscribe, or
//! publish again without corrupting the registry; such changes take effect
//! from the next publish onward.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::types::{EventKind, GameEvent};

/// Token returned by [`EventBus::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = dyn FnMut(&GameEvent);

struct Registration {
    id: HandlerId,
    handler: Rc<RefCell<Handler>>,
}

/// Synchronous publish/subscribe registry.
///
/// Shared between the state manager and external collaborators as
/// `Rc<EventBus>`; all methods take `&self` via interior mutability.
pub struct EventBus {
    registry: RefCell<HashMap<EventKind, Vec<Registration>>>,
    next_id: Cell<u64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// Register `handler` under `kind`. Multiple handlers per kind are
    /// allowed; invocation order is registration order.
    pub fn subscribe(
        &self,
        kind: EventKind,
        handler: impl FnMut(&GameEvent) + 'static,
    ) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        self.registry
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Registration {
                id,
                handler: Rc::new(RefCell::new(handler)),
            });
        id
    }

    /// Remove the handler registered under `kind` with the given id.
    ///
    /// A no-op if the pair is absent; unsubscribing twice is always safe.
    pub fn unsubscribe(&self, kind: EventKind, id: HandlerId) {
        let mut registry = self.registry.borrow_mut();
        if let Some(handlers) = registry.get_mut(&kind) {
            handlers.retain(|registration| registration.id != id);
            if handlers.is_empty() {
                registry.remove(&kind);
            }
        }
    }

    /// Invoke every handler currently registered for the event's kind,
    /// synchronously, in registration order.
    pub fn publish(&self, event: &GameEvent) {
        // Snapshot the handler list so re-entrant subscribe/unsubscribe calls
        // cannot invalidate the iteration.
        let handlers: Vec<Rc<RefCell<Handler>>> = match self.registry.borrow().get(&event.kind()) {
            Some(handlers) => handlers
                .iter()
                .map(|registration| Rc::clone(&registration.handler))
                .collect(),
            None => return,
        };

        for handler in handlers {
            (handler.borrow_mut())(event);
        }
    }

    /// Number of handlers currently registered for `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .get(&kind)
            .map_or(0, |handlers| handlers.len())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
