//=========================================================================
// Signal
//=========================================================================
//
// Zero-argument observer list.
//
// Architecture:
//   subscribe(FnMut) → Vec<(SubscriptionId, handler)>
//                           ↓
//   emit() ──────────→ handlers called in subscription order
//
// Delivery is synchronous: every handler has run by the time `emit`
// returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== SubscriptionId ======================================================

/// Identifies a handler registered on a [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

//=== Signal ==============================================================

type Handler = Box<dyn FnMut() + Send>;

/// Ordered list of zero-argument handlers.
#[derive(Default)]
pub struct Signal {
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler. Handlers run in registration order.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Invokes every handler once, in registration order.
    pub fn emit(&mut self) {
        for (_, handler) in self.handlers.iter_mut() {
            handler();
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Drops all handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
