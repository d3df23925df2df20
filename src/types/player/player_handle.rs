use crate::types::controls::ControlSurface;
use crate::types::player::{AccessorTable, Listener, ListenerId};

pub type ReadyCallback = Box<dyn FnOnce()>;

/// The contract the binding core needs from a media player instance.
///
/// Methods take `&self`: the handle is shared between the component, the
/// property bindings and the event subscriptions, and everything runs on a
/// single thread.
pub trait PlayerHandle: 'static {
    /// Property accessors this player supports. Called once per player.
    fn accessors(&self) -> AccessorTable<Self>
    where
        Self: Sized;
    fn on(&self, event: &str, listener: Listener) -> ListenerId;
    /// Removing a listener that is not registered must be a no-op.
    fn off(&self, id: ListenerId);
    /// Runs `callback` once the player finished its own setup, or right away
    /// when it already has.
    fn ready(&self, callback: ReadyCallback);
    fn control_bar(&self) -> &dyn ControlSurface;
    fn dispose(&self);
}
