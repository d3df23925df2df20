use crate::constants::{SKIP_BACKWARD_BUTTON, SKIP_FORWARD_BUTTON, SWITCH_MEDIA_BUTTON};
use crate::models::overlay::{reconcile, OverlayWidget, Reconciliation};
use crate::models::player_component::PlayerComponent;
use crate::runtime::RenderLoop;
use crate::types::config::PlayerConfig;
use crate::types::controls::{ClickHandler, ControlBar};
use crate::unit_tests::{action_names, recording_sink, Actions, TestPlayer};
use std::rc::Rc;

fn noop_handler() -> ClickHandler {
    Rc::new(|| {})
}

fn setup(config: PlayerConfig) -> (PlayerComponent<TestPlayer>, Rc<TestPlayer>, Actions) {
    let (actions, sink) = recording_sink();
    let component = PlayerComponent::new(&config, RenderLoop::new(), sink);
    let player = component
        .did_insert_element(TestPlayer::new().with_current_time(30.0))
        .expect("player inserted");
    (component, player, actions)
}

#[test]
fn first_pass_adds_skip_buttons() {
    let (component, player, _actions) = setup(PlayerConfig::default());
    let reconciliation = component.did_render();
    assert_eq!(
        reconciliation,
        Reconciliation {
            added: vec!["SkipForwardButton", "SkipBackwardButton"],
            removed: vec![],
        }
    );
    assert_eq!(
        player.control_bar.child_ids(),
        vec!["SkipForwardButton", "SkipBackwardButton"]
    );
    assert_eq!(
        player.control_bar.class_name("SkipForwardButton").as_deref(),
        Some("vjs-skip-forward icon pref10 vjs-control vjs-button")
    );
}

#[test]
fn repeated_passes_are_idempotent() {
    let config = PlayerConfig {
        switch_media_enabled: true,
        ..PlayerConfig::default()
    };
    let (component, player, _actions) = setup(config);
    assert_eq!(component.did_render().added.len(), 3);
    let mutations = player.control_bar.mutations();
    assert!(component.did_render().is_noop());
    assert!(component.did_render().is_noop());
    assert_eq!(player.control_bar.mutations(), mutations);
    assert_eq!(player.control_bar.child_ids().len(), 3);
}

#[test]
fn switch_media_button_tracks_flag() {
    let (component, player, _actions) = setup(PlayerConfig::default());
    component.did_render();
    let base = player.control_bar.mutations();

    component.set_switch_media_enabled(true);
    assert_eq!(component.did_render().added, vec!["SwitchMediaButton"]);
    component.set_switch_media_enabled(false);
    assert_eq!(component.did_render().removed, vec!["SwitchMediaButton"]);
    component.set_switch_media_enabled(true);
    assert_eq!(component.did_render().added, vec!["SwitchMediaButton"]);
    component.did_render();

    assert_eq!(player.control_bar.mutations() - base, 3);
    let ids = player.control_bar.child_ids();
    assert_eq!(
        ids.iter().filter(|id| **id == "SwitchMediaButton").count(),
        1
    );
}

#[test]
fn switch_media_click_sends_outward_action() {
    let config = PlayerConfig {
        switch_media_enabled: true,
        ..PlayerConfig::default()
    };
    let (component, player, actions) = setup(config);
    component.did_render();
    assert!(player.control_bar.click("SwitchMediaButton"));
    assert_eq!(action_names(&actions), vec!["switchMedia"]);
    assert!(actions.borrow()[0].context.is_none());
}

#[test]
fn skip_clicks_move_playback_position() {
    let (component, player, actions) = setup(PlayerConfig::default());
    component.did_render();
    assert!(player.control_bar.click("SkipForwardButton"));
    assert_eq!(player.current_time(), 40.0);
    assert!(player.control_bar.click("SkipBackwardButton"));
    assert!(player.control_bar.click("SkipBackwardButton"));
    assert_eq!(player.current_time(), 20.0);
    assert!(actions.borrow().is_empty());
}

#[test]
fn removed_widget_cannot_be_clicked() {
    let config = PlayerConfig {
        switch_media_enabled: true,
        ..PlayerConfig::default()
    };
    let (component, player, actions) = setup(config);
    component.did_render();
    component.set_switch_media_enabled(false);
    component.did_render();
    assert!(!player.control_bar.click("SwitchMediaButton"));
    assert!(actions.borrow().is_empty());
}

#[test]
fn render_without_player_or_after_teardown_is_noop() {
    let (actions, sink) = recording_sink();
    let component =
        PlayerComponent::<TestPlayer>::new(&PlayerConfig::default(), RenderLoop::new(), sink);
    assert!(component.did_render().is_noop());
    let player = component
        .did_insert_element(TestPlayer::new())
        .expect("player inserted");
    component.will_destroy_element();
    assert!(component.did_render().is_noop());
    assert!(player.control_bar.child_ids().is_empty());
    assert!(actions.borrow().is_empty());
}

#[test]
fn unconditional_widgets_are_never_removed() {
    let control_bar = ControlBar::default();
    let widgets = [
        OverlayWidget::always(SKIP_FORWARD_BUTTON),
        OverlayWidget::always(SKIP_BACKWARD_BUTTON),
    ];
    reconcile(&control_bar, &widgets, |_| noop_handler());
    let reconciliation = reconcile(&control_bar, &widgets, |_| noop_handler());
    assert!(reconciliation.is_noop());
    assert_eq!(control_bar.mutations(), 2);
}

#[test]
fn disabled_widget_absent_stays_absent() {
    let control_bar = ControlBar::default();
    let widgets = [OverlayWidget::when(SWITCH_MEDIA_BUTTON, false)];
    assert!(reconcile(&control_bar, &widgets, |_| noop_handler()).is_noop());
    assert!(control_bar.child_ids().is_empty());
    assert_eq!(control_bar.mutations(), 0);
}
