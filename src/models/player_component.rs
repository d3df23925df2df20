use crate::constants::{
    DEFAULT_SECONDS_TO_SKIP, READY_ACTION, SECONDS_TO_SKIP_ATTR, SKIP_BACKWARD_BUTTON,
    SKIP_FORWARD_BUTTON, SWITCH_MEDIA_BUTTON, SWITCH_MEDIA_ENABLED_ATTR,
};
use crate::models::binder::{set_player_property, PropertyBinder};
use crate::models::event_proxy::{proxy, EventSubscription};
use crate::models::overlay::{reconcile, OverlayWidget, Reconciliation};
use crate::models::skip::{skip, SkipDirection};
use crate::runtime::msg::{Action, ActionSink};
use crate::runtime::{Attrs, RenderLoop};
use crate::types::config::{EventMapping, PlayerConfig};
use crate::types::controls::{ActionTarget, ClickHandler, WidgetDescriptor};
use crate::types::player::{AccessorTable, PlayerHandle};
use crate::types::{is_truthy, PropertyValue};
use derivative::Derivative;
use enclose::enclose;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use strum_macros::{Display, EnumString};
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ComponentError {
    #[error("Component has no action handler for `{0}`")]
    UnknownAction(String),
    #[error("Player was already inserted")]
    AlreadyInserted,
    #[error("Component is destroyed")]
    Destroyed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lifecycle {
    Created,
    Inserted,
    Destroyed,
}

/// Actions the component handles itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, EnumString)]
pub enum ComponentAction {
    #[strum(serialize = "skipForward")]
    SkipForward,
    #[strum(serialize = "skipBackward")]
    SkipBackward,
}

struct Inner<P: PlayerHandle> {
    attrs: Attrs,
    sink: Rc<dyn ActionSink<P>>,
    player_events: Vec<EventMapping>,
    player: RefCell<Option<Rc<P>>>,
    accessors: RefCell<Option<Rc<AccessorTable<P>>>>,
    binder: PropertyBinder<P>,
    subscriptions: RefCell<Vec<EventSubscription<P>>>,
    lifecycle: Cell<Lifecycle>,
    ready: Cell<bool>,
}

/// Owns a player handle and keeps it in sync with the component attributes.
///
/// Lifecycle, driven by the host:
///
/// 1. [`did_insert_element`] hands over the player. Once the player is
///    ready, the configured event proxies are installed and `ready` is sent
///    with `(player, component)`.
/// 2. [`did_render`] runs after every render pass and reconciles the
///    control-bar widgets.
/// 3. [`will_destroy_element`] or [`player_disposed`], whichever comes first,
///    tears everything down. The other one is then a no-op.
///
/// Cloning yields another handle to the same component.
///
/// [`did_insert_element`]: PlayerComponent::did_insert_element
/// [`did_render`]: PlayerComponent::did_render
/// [`will_destroy_element`]: PlayerComponent::will_destroy_element
/// [`player_disposed`]: PlayerComponent::player_disposed
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct PlayerComponent<P: PlayerHandle> {
    inner: Rc<Inner<P>>,
}

#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct WeakPlayerComponent<P: PlayerHandle> {
    inner: Weak<Inner<P>>,
}

impl<P: PlayerHandle> WeakPlayerComponent<P> {
    pub fn upgrade(&self) -> Option<PlayerComponent<P>> {
        self.inner
            .upgrade()
            .map(|inner| PlayerComponent { inner })
    }
}

impl<P: PlayerHandle> PlayerComponent<P> {
    pub fn new<S: ActionSink<P> + 'static>(
        config: &PlayerConfig,
        render_loop: RenderLoop,
        sink: S,
    ) -> Self {
        let attrs = Attrs::new();
        attrs.set(SWITCH_MEDIA_ENABLED_ATTR, config.switch_media_enabled);
        attrs.set(SECONDS_TO_SKIP_ATTR, config.seconds_to_skip);
        PlayerComponent {
            inner: Rc::new(Inner {
                binder: PropertyBinder::new(attrs.clone(), render_loop),
                attrs,
                sink: Rc::new(sink),
                player_events: config.player_events.to_owned(),
                player: RefCell::new(None),
                accessors: RefCell::new(None),
                subscriptions: RefCell::new(vec![]),
                lifecycle: Cell::new(Lifecycle::Created),
                ready: Cell::new(false),
            }),
        }
    }
    pub fn downgrade(&self) -> WeakPlayerComponent<P> {
        WeakPlayerComponent {
            inner: Rc::downgrade(&self.inner),
        }
    }
    pub fn attrs(&self) -> &Attrs {
        &self.inner.attrs
    }
    pub fn player(&self) -> Option<Rc<P>> {
        self.inner.player.borrow().clone()
    }
    pub fn lifecycle(&self) -> Lifecycle {
        self.inner.lifecycle.get()
    }
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle() == Lifecycle::Destroyed
    }
    pub fn subscriptions(&self) -> usize {
        self.inner
            .subscriptions
            .borrow()
            .iter()
            .filter(|subscription| subscription.is_active())
            .count()
    }
    pub fn binder(&self) -> &PropertyBinder<P> {
        &self.inner.binder
    }
    pub fn switch_media_enabled(&self) -> bool {
        self.inner
            .attrs
            .get(SWITCH_MEDIA_ENABLED_ATTR)
            .map_or(false, |value| is_truthy(&value))
    }
    pub fn set_switch_media_enabled(&self, enabled: bool) -> bool {
        self.inner.attrs.set(SWITCH_MEDIA_ENABLED_ATTR, enabled)
    }
    pub fn seconds_to_skip(&self) -> f64 {
        self.inner
            .attrs
            .get(SECONDS_TO_SKIP_ATTR)
            .and_then(|value| value.as_f64())
            .unwrap_or(DEFAULT_SECONDS_TO_SKIP)
    }
    /// Takes ownership of the player created for this component's element.
    pub fn did_insert_element(&self, player: P) -> Result<Rc<P>, ComponentError> {
        match self.lifecycle() {
            Lifecycle::Created => {}
            Lifecycle::Inserted => return Err(ComponentError::AlreadyInserted),
            Lifecycle::Destroyed => return Err(ComponentError::Destroyed),
        };
        let player = Rc::new(player);
        *self.inner.player.borrow_mut() = Some(player.clone());
        self.inner.lifecycle.set(Lifecycle::Inserted);
        let component = self.downgrade();
        player.ready(Box::new(move || {
            if let Some(component) = component.upgrade() {
                component.player_ready();
            };
        }));
        Ok(player)
    }
    fn player_ready(&self) {
        if self.is_destroyed() {
            debug!("player ready after teardown, ignoring");
            return;
        };
        if self.inner.ready.replace(true) {
            trace!("player ready fired again, ignoring");
            return;
        };
        let player = match self.player() {
            Some(player) => player,
            None => return,
        };
        for mapping in &self.inner.player_events {
            self.send_action_on_player_event(&player, &mapping.action, Some(&mapping.event));
        }
        self.inner.sink.send_action(Action::with_context(
            READY_ACTION,
            player,
            self.clone(),
            vec![],
        ));
    }
    /// Reconciles the auxiliary control-bar widgets.
    pub fn did_render(&self) -> Reconciliation {
        if self.is_destroyed() {
            return Reconciliation::default();
        };
        let player = match self.player() {
            Some(player) => player,
            None => return Reconciliation::default(),
        };
        let widgets = [
            OverlayWidget::when(SWITCH_MEDIA_BUTTON, self.switch_media_enabled()),
            OverlayWidget::always(SKIP_FORWARD_BUTTON),
            OverlayWidget::always(SKIP_BACKWARD_BUTTON),
        ];
        let component = self.downgrade();
        reconcile(player.control_bar(), &widgets, |descriptor| {
            let descriptor = *descriptor;
            Rc::new(enclose!((component) move || {
                if let Some(component) = component.upgrade() {
                    component.widget_clicked(&descriptor);
                };
            })) as ClickHandler
        })
    }
    pub fn will_destroy_element(&self) -> bool {
        self.teardown(true)
    }
    /// Teardown triggered by the player being disposed from the outside.
    pub fn player_disposed(&self) -> bool {
        self.teardown(false)
    }
    /// Returns `false` when the component was already torn down.
    fn teardown(&self, dispose: bool) -> bool {
        if self.inner.lifecycle.replace(Lifecycle::Destroyed) == Lifecycle::Destroyed {
            trace!("component already torn down");
            return false;
        };
        let observers = self.inner.binder.teardown();
        let subscriptions = self.inner.subscriptions.take();
        let listeners = subscriptions
            .iter()
            .filter(|subscription| subscription.release())
            .count();
        debug!(observers, listeners, "component torn down");
        if dispose {
            match self.player() {
                Some(player) => player.dispose(),
                None => debug!("no player to dispose"),
            };
        };
        true
    }
    /// One-way binding from the `property` attribute to the
    /// `player_property` of the player (same name when `None`).
    ///
    /// Returns `false` when the component is being destroyed.
    pub fn bind_property_to_player(
        &self,
        player: &Rc<P>,
        property: &str,
        player_property: Option<&str>,
    ) -> bool {
        if self.is_destroyed() {
            return false;
        };
        let accessors = self.accessors_for(player);
        self.inner
            .binder
            .bind(player, accessors, property, player_property.unwrap_or(property))
            .is_some()
    }
    /// Sends `action` whenever the player emits `event` (same name when
    /// `None`). Calling it twice for the same pair sends the action twice.
    ///
    /// Returns `false` when the component is being destroyed.
    pub fn send_action_on_player_event(
        &self,
        player: &Rc<P>,
        action: &str,
        event: Option<&str>,
    ) -> bool {
        if self.is_destroyed() {
            return false;
        };
        let subscription = proxy(
            player,
            self,
            self.inner.sink.clone(),
            action,
            event.unwrap_or(action),
        );
        self.inner.subscriptions.borrow_mut().push(subscription);
        true
    }
    pub fn set_player_property(
        &self,
        player: &Rc<P>,
        player_property: &str,
        value: Option<PropertyValue>,
    ) -> bool {
        let accessors = self.accessors_for(player);
        set_player_property(&**player, &accessors, player_property, value)
    }
    /// Dispatches one of the component's own actions.
    pub fn send(&self, action: &str) -> Result<Option<f64>, ComponentError> {
        let action = action
            .parse::<ComponentAction>()
            .map_err(|_| ComponentError::UnknownAction(action.to_owned()))?;
        let direction = match action {
            ComponentAction::SkipForward => SkipDirection::Forward,
            ComponentAction::SkipBackward => SkipDirection::Backward,
        };
        Ok(self.skip(direction))
    }
    pub fn skip_forward(&self) -> Option<f64> {
        self.skip(SkipDirection::Forward)
    }
    pub fn skip_backward(&self) -> Option<f64> {
        self.skip(SkipDirection::Backward)
    }
    fn skip(&self, direction: SkipDirection) -> Option<f64> {
        let player = self.player()?;
        let accessors = self.accessors_for(&player);
        skip(&*player, &accessors, self.seconds_to_skip(), direction)
    }
    fn widget_clicked(&self, descriptor: &WidgetDescriptor) {
        match descriptor.target {
            ActionTarget::Outward => self.inner.sink.send_action(Action::new(descriptor.action)),
            ActionTarget::Component => {
                if let Err(error) = self.send(descriptor.action) {
                    warn!(%error, "widget action failed");
                };
            }
        };
    }
    fn accessors_for(&self, player: &Rc<P>) -> Rc<AccessorTable<P>> {
        if let Some(accessors) = self.inner.accessors.borrow().as_ref() {
            return accessors.clone();
        };
        let accessors = Rc::new(player.accessors());
        *self.inner.accessors.borrow_mut() = Some(accessors.clone());
        accessors
    }
}

impl<P: PlayerHandle> fmt::Debug for PlayerComponent<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerComponent")
            .field("lifecycle", &self.lifecycle())
            .field("attrs", &self.inner.attrs)
            .field("has_player", &self.inner.player.borrow().is_some())
            .field("subscriptions", &self.subscriptions())
            .finish()
    }
}
