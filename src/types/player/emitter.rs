use crate::types::PropertyValue;
use derive_more::Display;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback registered for a named player event. Receives the event
/// arguments exactly as the player emitted them.
pub type Listener = Box<dyn Fn(&[PropertyValue])>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Debug)]
#[display(fmt = "listener#{}", _0)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    event: String,
    listener: Rc<dyn Fn(&[PropertyValue])>,
}

/// Listener registry for [`PlayerHandle`] implementors.
///
/// Listeners run in registration order. `emit` works on a snapshot of the
/// registrations, so a listener may add or remove listeners, or call back
/// into the player, while the event is being dispatched.
///
/// [`PlayerHandle`]: crate::types::player::PlayerHandle
#[derive(Default)]
pub struct EventEmitter {
    next_id: Cell<u64>,
    registrations: RefCell<Vec<Registration>>,
}

impl EventEmitter {
    pub fn on(&self, event: &str, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.registrations.borrow_mut().push(Registration {
            id,
            event: event.to_owned(),
            listener: Rc::from(listener),
        });
        id
    }
    /// Returns `false` when the listener was already removed.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut registrations = self.registrations.borrow_mut();
        let len = registrations.len();
        registrations.retain(|registration| registration.id != id);
        registrations.len() != len
    }
    pub fn off_all(&self) {
        self.registrations.borrow_mut().clear();
    }
    /// Returns the number of listeners notified.
    pub fn emit(&self, event: &str, args: &[PropertyValue]) -> usize {
        let listeners = self
            .registrations
            .borrow()
            .iter()
            .filter(|registration| registration.event == event)
            .map(|registration| registration.listener.clone())
            .collect::<Vec<_>>();
        for listener in &listeners {
            listener(args);
        }
        listeners.len()
    }
    pub fn listener_count(&self, event: &str) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|registration| registration.event == event)
            .count()
    }
    pub fn is_empty(&self) -> bool {
        self.registrations.borrow().is_empty()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field(
                "events",
                &self
                    .registrations
                    .borrow()
                    .iter()
                    .map(|registration| (registration.id, registration.event.to_owned()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
