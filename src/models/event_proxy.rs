use crate::models::player_component::{PlayerComponent, WeakPlayerComponent};
use crate::runtime::msg::{Action, ActionSink};
use crate::types::player::{ListenerId, PlayerHandle};
use crate::types::PropertyValue;
use std::cell::Cell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Listener forwarding one player event as an outward action.
///
/// Installing the same pair twice yields two subscriptions and so two
/// actions per event; nothing is deduplicated.
pub struct EventSubscription<P> {
    action: String,
    event: String,
    player: Weak<P>,
    listener: Cell<Option<ListenerId>>,
}

impl<P: PlayerHandle> EventSubscription<P> {
    pub fn action(&self) -> &str {
        &self.action
    }
    pub fn event(&self) -> &str {
        &self.event
    }
    pub fn is_active(&self) -> bool {
        self.listener.get().is_some()
    }
    /// Removes the listener from the player if it is still around. Returns
    /// `false` when already released.
    pub fn release(&self) -> bool {
        match self.listener.take() {
            Some(id) => {
                match self.player.upgrade() {
                    Some(player) => player.off(id),
                    None => trace!(event = %self.event, "player already dropped"),
                };
                true
            }
            None => false,
        }
    }
}

/// Subscribes to `event` on `player` and sends `action` with
/// `(player, component, ...args)` every time it fires.
pub fn proxy<P: PlayerHandle>(
    player: &Rc<P>,
    component: &PlayerComponent<P>,
    sink: Rc<dyn ActionSink<P>>,
    action: &str,
    event: &str,
) -> EventSubscription<P> {
    let weak_player = Rc::downgrade(player);
    let weak_component: WeakPlayerComponent<P> = component.downgrade();
    let action_name = action.to_owned();
    let listener = player.on(
        event,
        Box::new(move |args: &[PropertyValue]| {
            match (weak_player.upgrade(), weak_component.upgrade()) {
                (Some(player), Some(component)) => sink.send_action(Action::with_context(
                    action_name.to_owned(),
                    player,
                    component,
                    args.to_vec(),
                )),
                _ => trace!(action = %action_name, "component gone, dropping event"),
            };
        }),
    );
    debug!(action, event, %listener, "proxying player event");
    EventSubscription {
        action: action.to_owned(),
        event: event.to_owned(),
        player: Rc::downgrade(player),
        listener: Cell::new(Some(listener)),
    }
}
