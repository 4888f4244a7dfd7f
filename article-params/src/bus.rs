use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::{Rc, Weak};

use crate::visibility::{Interaction, InteractionListener, InteractionSource};

/// Single-threaded fan-out of host interactions.
///
/// The host emits every pointer press and focus change into the bus; each
/// live [`BusListener`] receives its own copy in emission order. Listeners
/// only see interactions emitted after they subscribed.
pub struct InteractionBus<T> {
    inner: Rc<RefCell<BusState<T>>>,
}

struct BusState<T> {
    next_id: u64,
    queues: BTreeMap<u64, VecDeque<Interaction<T>>>,
}

impl<T: Clone> InteractionBus<T> {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusState {
                next_id: 0,
                queues: BTreeMap::new(),
            })),
        }
    }

    /// Deliver `interaction` to every live listener.
    pub fn emit(&self, interaction: Interaction<T>) {
        let mut state = self.inner.borrow_mut();
        for queue in state.queues.values_mut() {
            queue.push_back(interaction.clone());
        }
    }

    /// Return the number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().queues.len()
    }

    /// Return whether anyone is subscribed. Hosts use this to attach their
    /// own global hooks only while needed.
    pub fn has_listeners(&self) -> bool {
        self.listener_count() > 0
    }
}

impl<T: Clone> Default for InteractionBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for InteractionBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for InteractionBus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionBus")
            .field("listeners", &self.inner.borrow().queues.len())
            .finish()
    }
}

impl<T: Clone> InteractionSource<T> for InteractionBus<T> {
    type Listener = BusListener<T>;

    fn subscribe(&self) -> BusListener<T> {
        let mut state = self.inner.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.queues.insert(id, VecDeque::new());
        log::trace!("interaction listener {id} subscribed");

        BusListener {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }
}

/// Subscription guard returned by [`InteractionBus`].
///
/// Dropping it removes the listener and its pending interactions. The guard
/// does not keep the bus alive.
pub struct BusListener<T> {
    id: u64,
    bus: Weak<RefCell<BusState<T>>>,
}

impl<T> InteractionListener<T> for BusListener<T> {
    fn next_interaction(&mut self) -> Option<Interaction<T>> {
        let bus = self.bus.upgrade()?;
        let mut state = bus.borrow_mut();
        state.queues.get_mut(&self.id)?.pop_front()
    }
}

impl<T> Drop for BusListener<T> {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().queues.remove(&self.id);
            log::trace!("interaction listener {} released", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InteractionBus;
    use crate::visibility::{
        Interaction, InteractionListener, InteractionSource,
    };

    #[test]
    fn given_listener_when_events_emitted_then_received_in_order() {
        let bus = InteractionBus::<i32>::new();
        let mut listener = bus.subscribe();

        bus.emit(Interaction::PointerDown(1));
        bus.emit(Interaction::FocusIn(2));

        assert_eq!(
            listener.next_interaction(),
            Some(Interaction::PointerDown(1))
        );
        assert_eq!(listener.next_interaction(), Some(Interaction::FocusIn(2)));
        assert_eq!(listener.next_interaction(), None);
    }

    #[test]
    fn given_event_before_subscribe_when_polled_then_it_is_not_delivered() {
        let bus = InteractionBus::<i32>::new();
        bus.emit(Interaction::PointerDown(1));

        let mut listener = bus.subscribe();

        assert_eq!(listener.next_interaction(), None);
    }

    #[test]
    fn given_two_listeners_when_event_emitted_then_both_receive_copy() {
        let bus = InteractionBus::<i32>::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.emit(Interaction::PointerDown(7));

        assert_eq!(first.next_interaction(), Some(Interaction::PointerDown(7)));
        assert_eq!(
            second.next_interaction(),
            Some(Interaction::PointerDown(7))
        );
    }

    #[test]
    fn given_listener_when_dropped_then_bus_has_no_listeners() {
        let bus = InteractionBus::<u8>::new();
        let listener = bus.subscribe();
        assert!(bus.has_listeners());

        drop(listener);

        assert!(!bus.has_listeners());
    }

    #[test]
    fn given_dropped_bus_when_listener_polled_then_returns_none() {
        let bus = InteractionBus::<i32>::new();
        let mut listener = bus.subscribe();
        bus.emit(Interaction::PointerDown(1));

        drop(bus);

        assert_eq!(listener.next_interaction(), None);
    }
}
