use crate::runtime::msg::{Action, ActionSink, ChannelSink};
use crate::unit_tests::TestPlayer;
use futures::channel::mpsc::unbounded;
use serde_json::json;

#[test]
fn channel_sink_queues_actions() {
    let (tx, mut rx) = unbounded::<Action<TestPlayer>>();
    let sink = ChannelSink::from(tx);
    let mut action = Action::new("switchMedia");
    action.args.push(json!(1));
    sink.send_action(action);
    sink.send_action(Action::new("ended"));
    let first = rx.try_recv().expect("action queued");
    assert_eq!(first.name, "switchMedia");
    assert_eq!(first.args, vec![json!(1)]);
    let second = rx.try_recv().expect("action queued");
    assert_eq!(second.name, "ended");
    assert!(rx.try_recv().is_err());
}

#[test]
fn channel_sink_drops_actions_when_closed() {
    let (tx, rx) = unbounded::<Action<TestPlayer>>();
    let sink = ChannelSink::from(tx);
    drop(rx);
    sink.send_action(Action::new("ready"));
}
