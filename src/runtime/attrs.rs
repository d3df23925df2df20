use crate::types::{values_equal, PropertyValue};
use derive_more::Display;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Display, Debug)]
#[display(fmt = "observer#{}", _0)]
pub struct ObserverToken(u64);

struct Observation {
    token: ObserverToken,
    key: String,
    observer: Rc<dyn Fn()>,
}

#[derive(Default)]
struct AttrsInner {
    values: RefCell<HashMap<String, PropertyValue>>,
    observations: RefCell<Vec<Observation>>,
    next_token: Cell<u64>,
}

/// Reactive attributes of a component.
///
/// Observers of a key run synchronously, in registration order, every time
/// the stored value of that key actually changes. Cloning yields another
/// handle to the same store.
#[derive(Clone, Default)]
pub struct Attrs {
    inner: Rc<AttrsInner>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }
    /// `None` means the attribute was never set.
    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        self.inner.values.borrow().get(key).cloned()
    }
    /// Returns whether the value changed (and observers were notified).
    pub fn set(&self, key: &str, value: impl Into<PropertyValue>) -> bool {
        let value = value.into();
        let changed = {
            let mut values = self.inner.values.borrow_mut();
            let unchanged = values
                .get(key)
                .map_or(false, |current| values_equal(current, &value));
            if !unchanged {
                values.insert(key.to_owned(), value);
            };
            !unchanged
        };
        if changed {
            self.notify(key);
        };
        changed
    }
    pub fn unset(&self, key: &str) -> Option<PropertyValue> {
        let removed = self.inner.values.borrow_mut().remove(key);
        if removed.is_some() {
            self.notify(key);
        };
        removed
    }
    pub fn observe<F: Fn() + 'static>(&self, key: &str, observer: F) -> ObserverToken {
        let token = ObserverToken(self.inner.next_token.get());
        self.inner.next_token.set(self.inner.next_token.get() + 1);
        self.inner.observations.borrow_mut().push(Observation {
            token,
            key: key.to_owned(),
            observer: Rc::new(observer),
        });
        token
    }
    /// Returns `false` when the token was already released.
    pub fn unobserve(&self, token: ObserverToken) -> bool {
        let mut observations = self.inner.observations.borrow_mut();
        let len = observations.len();
        observations.retain(|observation| observation.token != token);
        observations.len() != len
    }
    pub fn observer_count(&self, key: &str) -> usize {
        self.inner
            .observations
            .borrow()
            .iter()
            .filter(|observation| observation.key == key)
            .count()
    }
    fn notify(&self, key: &str) {
        let observers = self
            .inner
            .observations
            .borrow()
            .iter()
            .filter(|observation| observation.key == key)
            .map(|observation| observation.observer.clone())
            .collect::<Vec<_>>();
        observers.iter().for_each(|observer| observer());
    }
}

impl fmt::Debug for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attrs")
            .field("values", &self.inner.values.borrow())
            .field("observers", &self.inner.observations.borrow().len())
            .finish()
    }
}
