use crate::runtime::{Attrs, ObserverToken, RenderLoop};
use crate::types::player::{AccessorTable, PlayerHandle};
use crate::types::{values_equal, PropertyValue};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

/// Writes `value` to `player_property` unless the player already holds an
/// equal value.
///
/// Unsupported properties and missing values are skipped, as are values the
/// accessor rejects. Returns whether a write happened.
pub fn set_player_property<P>(
    player: &P,
    accessors: &AccessorTable<P>,
    player_property: &str,
    value: Option<PropertyValue>,
) -> bool {
    let accessor = match accessors.get(player_property) {
        Some(accessor) => accessor,
        None => {
            trace!(player_property, "player does not support property, skipping");
            return false;
        }
    };
    let value = match value {
        Some(value) => value,
        None => return false,
    };
    let previous = accessor.read(player);
    if values_equal(&previous, &value) {
        trace!(player_property, "player already holds value, skipping");
        return false;
    };
    match accessor.write(player, value) {
        Ok(()) => true,
        Err(error) => {
            warn!(%error, "player rejected property value");
            false
        }
    }
}

/// One-way link from a component attribute to a player property.
pub struct Binding<P> {
    property: String,
    player_property: String,
    attrs: Attrs,
    player: Weak<P>,
    accessors: Rc<AccessorTable<P>>,
    token: Cell<Option<ObserverToken>>,
    pending: Cell<bool>,
    released: Cell<bool>,
}

impl<P: PlayerHandle> Binding<P> {
    pub fn property(&self) -> &str {
        &self.property
    }
    pub fn player_property(&self) -> &str {
        &self.player_property
    }
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
    pub fn is_released(&self) -> bool {
        self.released.get()
    }
    /// Copies the current attribute value to the player.
    fn apply(&self) -> bool {
        if self.released.get() {
            return false;
        };
        match self.player.upgrade() {
            Some(player) => set_player_property(
                &*player,
                &self.accessors,
                &self.player_property,
                self.attrs.get(&self.property),
            ),
            None => false,
        }
    }
    /// At most one application is queued at a time; it reads the attribute
    /// when it runs, so the last change before the flush wins.
    fn schedule(self: &Rc<Self>, render_loop: &RenderLoop) {
        if self.released.get() {
            return;
        };
        if self.pending.replace(true) {
            trace!(property = %self.property, "application already scheduled");
            return;
        };
        let binding = self.clone();
        render_loop.schedule(Box::new(move || {
            binding.pending.set(false);
            binding.apply();
        }));
    }
    /// Returns `false` when already released.
    fn release(&self) -> bool {
        if self.released.replace(true) {
            return false;
        };
        if let Some(token) = self.token.take() {
            self.attrs.unobserve(token);
        };
        true
    }
}

/// Owns every [`Binding`] of a component.
pub struct PropertyBinder<P> {
    attrs: Attrs,
    render_loop: RenderLoop,
    bindings: RefCell<Vec<Rc<Binding<P>>>>,
    torn_down: Cell<bool>,
}

impl<P: PlayerHandle> PropertyBinder<P> {
    pub fn new(attrs: Attrs, render_loop: RenderLoop) -> Self {
        PropertyBinder {
            attrs,
            render_loop,
            bindings: RefCell::new(vec![]),
            torn_down: Cell::new(false),
        }
    }
    /// Observes `property` and mirrors it onto `player_property`.
    ///
    /// The first application runs right away so the player reflects the
    /// current attribute before any change; later ones wait for the next
    /// render flush.
    pub fn bind(
        &self,
        player: &Rc<P>,
        accessors: Rc<AccessorTable<P>>,
        property: &str,
        player_property: &str,
    ) -> Option<Rc<Binding<P>>> {
        if self.torn_down.get() {
            debug!(property, "binder torn down, ignoring binding");
            return None;
        };
        let binding = Rc::new(Binding {
            property: property.to_owned(),
            player_property: player_property.to_owned(),
            attrs: self.attrs.clone(),
            player: Rc::downgrade(player),
            accessors,
            token: Cell::new(None),
            pending: Cell::new(false),
            released: Cell::new(false),
        });
        let weak_binding = Rc::downgrade(&binding);
        let render_loop = self.render_loop.clone();
        let token = self.attrs.observe(property, move || {
            if let Some(binding) = weak_binding.upgrade() {
                binding.schedule(&render_loop);
            };
        });
        binding.token.set(Some(token));
        self.bindings.borrow_mut().push(binding.clone());
        binding.apply();
        Some(binding)
    }
    pub fn bindings(&self) -> Vec<Rc<Binding<P>>> {
        self.bindings.borrow().clone()
    }
    pub fn is_torn_down(&self) -> bool {
        self.torn_down.get()
    }
    /// Releases every observer. Returns how many were released; a second
    /// call releases nothing.
    pub fn teardown(&self) -> usize {
        if self.torn_down.replace(true) {
            return 0;
        };
        let bindings = self.bindings.take();
        bindings.iter().filter(|binding| binding.release()).count()
    }
}
