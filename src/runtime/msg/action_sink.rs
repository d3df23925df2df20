use crate::runtime::msg::Action;
use crate::types::player::PlayerHandle;
use derive_more::From;
use futures::channel::mpsc::UnboundedSender;
use tracing::warn;

/// Channel outward actions are fired into.
pub trait ActionSink<P: PlayerHandle> {
    fn send_action(&self, action: Action<P>);
}

impl<P, F> ActionSink<P> for F
where
    P: PlayerHandle,
    F: Fn(Action<P>),
{
    fn send_action(&self, action: Action<P>) {
        self(action)
    }
}

/// Queues outward actions on an unbounded channel for a host that drains
/// them from its own loop.
#[derive(From)]
pub struct ChannelSink<P: PlayerHandle>(UnboundedSender<Action<P>>);

impl<P: PlayerHandle> ActionSink<P> for ChannelSink<P> {
    fn send_action(&self, action: Action<P>) {
        let name = action.name.to_owned();
        if self.0.unbounded_send(action).is_err() {
            warn!(action = %name, "action receiver is closed, dropping action");
        };
    }
}
