use crate::constants::SECONDS_TO_SKIP_ATTR;
use crate::models::player_component::{ComponentError, PlayerComponent};
use crate::models::skip::{skip, SkipDirection};
use crate::runtime::RenderLoop;
use crate::types::config::PlayerConfig;
use crate::types::player::{AccessorTable, PlayerHandle};
use crate::unit_tests::{recording_sink, TestPlayer};
use std::rc::Rc;

fn setup(current_time: f64) -> (PlayerComponent<TestPlayer>, Rc<TestPlayer>) {
    let (_actions, sink) = recording_sink();
    let component = PlayerComponent::new(&PlayerConfig::default(), RenderLoop::new(), sink);
    let player = component
        .did_insert_element(TestPlayer::new().with_current_time(current_time))
        .expect("player inserted");
    (component, player)
}

#[test]
fn skip_forward_adds_delta() {
    let (component, player) = setup(12.5);
    assert_eq!(component.skip_forward(), Some(22.5));
    assert_eq!(player.current_time(), 22.5);
}

#[test]
fn skip_backward_subtracts_delta() {
    let (component, player) = setup(12.5);
    assert_eq!(component.skip_backward(), Some(2.5));
    assert_eq!(player.current_time(), 2.5);
}

#[test]
fn skip_is_not_clamped() {
    let (component, player) = setup(3.0);
    assert_eq!(component.skip_backward(), Some(-7.0));
    assert_eq!(player.current_time(), -7.0);
}

#[test]
fn seconds_to_skip_follows_attribute() {
    let (component, player) = setup(100.0);
    component.attrs().set(SECONDS_TO_SKIP_ATTR, 30);
    assert_eq!(component.send("skipForward"), Ok(Some(130.0)));
    assert_eq!(component.send("skipBackward"), Ok(Some(100.0)));
    assert_eq!(player.current_time(), 100.0);
}

#[test]
fn configured_seconds_to_skip() {
    let (_actions, sink) = recording_sink();
    let config = PlayerConfig {
        seconds_to_skip: 5.0,
        ..PlayerConfig::default()
    };
    let component = PlayerComponent::new(&config, RenderLoop::new(), sink);
    component
        .did_insert_element(TestPlayer::new())
        .expect("player inserted");
    assert_eq!(component.skip_forward(), Some(5.0));
}

#[test]
fn unknown_action_is_an_error() {
    let (component, player) = setup(0.0);
    assert_eq!(
        component.send("rewind"),
        Err(ComponentError::UnknownAction("rewind".to_owned()))
    );
    assert!(player.writes().is_empty());
}

#[test]
fn skip_without_player_is_noop() {
    let (_actions, sink) = recording_sink();
    let component =
        PlayerComponent::<TestPlayer>::new(&PlayerConfig::default(), RenderLoop::new(), sink);
    assert_eq!(component.skip_forward(), None);
}

#[test]
fn skip_without_current_time_accessor_is_noop() {
    let player = TestPlayer::new();
    let accessors = AccessorTable::<TestPlayer>::new();
    assert_eq!(skip(&player, &accessors, 10.0, SkipDirection::Forward), None);
    assert!(player.writes().is_empty());
    let accessors = player.accessors();
    assert_eq!(skip(&player, &accessors, 10.0, SkipDirection::Forward), Some(10.0));
}

#[test]
fn non_finite_target_is_not_written() {
    let player = TestPlayer::new().with_current_time(f64::MAX);
    let accessors = player.accessors();
    assert_eq!(
        skip(&player, &accessors, f64::MAX, SkipDirection::Forward),
        None
    );
    assert!(player.writes().is_empty());
    assert_eq!(player.current_time(), f64::MAX);
}
