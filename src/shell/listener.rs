//! Scoped scroll listeners.
//!
//! A [`Subscription`] is the only handle to a registered listener; dropping
//! it unregisters the listener, so an unmounted component can never be
//! called again.

use std::{cell::RefCell, fmt, rc::Rc};

type Listener = Box<dyn FnMut(f64)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    /// Ids dropped while their listener was out for dispatch.
    dropped: Vec<u64>,
}

/// Dispatches scroll offsets to the currently registered listeners.
#[derive(Clone, Default)]
pub struct ScrollHub {
    registry: Rc<RefCell<Registry>>,
}

impl ScrollHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays registered while the returned
    /// subscription is alive.
    #[must_use = "dropping the subscription removes the listener"]
    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));

        Subscription {
            id,
            registry: Rc::clone(&self.registry),
        }
    }

    /// Deliver one scroll event to every listener.
    pub fn dispatch(&self, offset: f64) {
        // Take the listeners out so a callback may subscribe or drop others.
        let mut listeners = std::mem::take(&mut self.registry.borrow_mut().listeners);
        for (_, listener) in &mut listeners {
            listener(offset);
        }

        let mut registry = self.registry.borrow_mut();
        let dropped = std::mem::take(&mut registry.dropped);
        listeners.retain(|(id, _)| !dropped.contains(id));
        let added = std::mem::replace(&mut registry.listeners, listeners);
        registry.listeners.extend(added);
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl fmt::Debug for ScrollHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Registration handle; unregisters on drop.
pub struct Subscription {
    id: u64,
    registry: Rc<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Ok(mut registry) = self.registry.try_borrow_mut() {
            let before = registry.listeners.len();
            registry.listeners.retain(|(id, _)| *id != self.id);
            if registry.listeners.len() == before {
                registry.dropped.push(self.id);
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let hub = ScrollHub::new();
        let seen = Rc::new(Cell::new(0.0));
        let sink = Rc::clone(&seen);
        let _sub = hub.subscribe(move |offset| sink.set(offset));

        hub.dispatch(42.0);
        assert_eq!(seen.get(), 42.0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let hub = ScrollHub::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sub = hub.subscribe(move |_| counter.set(counter.get() + 1));

        hub.dispatch(1.0);
        drop(sub);
        hub.dispatch(2.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_drop_during_dispatch() {
        let hub = ScrollHub::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let sub = hub.subscribe(move |_| counter.set(counter.get() + 1));
        *slot.borrow_mut() = Some(sub);

        let holder = Rc::clone(&slot);
        let _killer = hub.subscribe(move |_| drop(holder.borrow_mut().take()));

        hub.dispatch(1.0);
        hub.dispatch(2.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_drop_only_removes_own_listener() {
        let hub = ScrollHub::new();
        let first = hub.subscribe(|_| {});
        let _second = hub.subscribe(|_| {});
        assert_eq!(hub.listener_count(), 2);

        drop(first);
        assert_eq!(hub.listener_count(), 1);
    }
}
