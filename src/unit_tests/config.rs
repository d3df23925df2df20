use crate::constants::DEFAULT_SECONDS_TO_SKIP;
use crate::types::config::{ConfigError, EventMapping, PlayerConfig};
use serde_test::{assert_tokens, Token};

#[test]
fn default_config() {
    let config = PlayerConfig::default();
    assert_eq!(config.seconds_to_skip, DEFAULT_SECONDS_TO_SKIP);
    assert!(!config.switch_media_enabled);
    assert_eq!(config.player_events.len(), 25);
    assert_eq!(config.player_events[0], EventMapping::same("abort"));
    assert_eq!(config.player_events[1], EventMapping::same("canplay"));
    assert_eq!(config.player_events[24], EventMapping::same("waiting"));
    assert_eq!(
        config.player_attribute_bindings,
        vec![
            "autoplay",
            "controls",
            "fluid",
            "language",
            "logo",
            "loop",
            "muted",
            "playbackRate",
            "poster",
            "preload",
            "src",
            "volume",
            "currentTime",
        ]
    );
}

#[test]
fn partial_json_keeps_defaults() {
    let config = PlayerConfig::from_json(r#"{"secondsToSkip":15,"switchMediaEnabled":true}"#)
        .expect("valid config");
    assert_eq!(config.seconds_to_skip, 15.0);
    assert!(config.switch_media_enabled);
    assert_eq!(config.player_events, PlayerConfig::default().player_events);
}

#[test]
fn custom_event_mappings_from_json() {
    let config = PlayerConfig::from_json(
        r#"{"playerEvents":[{"action":"onPlay","event":"play"}],"playerAttributeBindings":["src"]}"#,
    )
    .expect("valid config");
    let defaults = PlayerConfig::default().player_events;
    assert_eq!(config.player_events.len(), defaults.len() + 1);
    assert_eq!(config.player_events[..defaults.len()], defaults[..]);
    assert_eq!(
        config.player_events.last(),
        Some(&EventMapping::new("onPlay", "play"))
    );
    assert_eq!(config.player_attribute_bindings, vec!["src"]);
}

#[test]
fn json_mapping_replaces_default_for_same_action() {
    let config = PlayerConfig::from_json(
        r#"{"playerEvents":[{"action":"error","event":"vjs-error"},{"action":"adStart","event":"ads-ad-started"}]}"#,
    )
    .expect("valid config");
    let defaults = PlayerConfig::default().player_events;
    let position = defaults
        .iter()
        .position(|mapping| mapping.action == "error")
        .expect("error mapping");
    assert_eq!(config.player_events.len(), 26);
    assert_eq!(
        config.player_events[position],
        EventMapping::new("error", "vjs-error")
    );
    assert_eq!(
        config.player_events[25],
        EventMapping::new("adStart", "ads-ad-started")
    );
}

#[test]
fn player_event_with_same_action_is_replaced_in_place() {
    let defaults = PlayerConfig::default().player_events;
    let config = PlayerConfig::default()
        .with_player_event(EventMapping::new("error", "vjs-error"))
        .with_player_event(EventMapping::new("adStart", "ads-ad-started"))
        .with_player_event(EventMapping::new("adStart", "ads-started"));
    assert_eq!(config.player_events.len(), defaults.len() + 1);
    assert_eq!(
        config
            .player_events
            .iter()
            .filter(|mapping| mapping.action == "error")
            .collect::<Vec<_>>(),
        vec![&EventMapping::new("error", "vjs-error")]
    );
    assert_eq!(
        config.player_events.last(),
        Some(&EventMapping::new("adStart", "ads-started"))
    );
    let actions = config
        .player_events
        .iter()
        .map(|mapping| mapping.action.to_owned())
        .collect::<Vec<_>>();
    let default_actions = defaults
        .iter()
        .map(|mapping| mapping.action.to_owned())
        .collect::<Vec<_>>();
    assert_eq!(actions[..defaults.len()], default_actions[..]);
}

#[test]
fn serialized_config_reads_back_unchanged() {
    let config = PlayerConfig::default()
        .with_player_event(EventMapping::new("onSeek", "seeked"))
        .with_attribute_binding("poster");
    let json = serde_json::to_string(&config).expect("serializable config");
    assert_eq!(PlayerConfig::from_json(&json).expect("valid config"), config);
}

#[test]
fn invalid_json_is_an_error() {
    let result = PlayerConfig::from_json(r#"{"secondsToSkip":"ten"}"#);
    assert!(matches!(result, Err(ConfigError::Serde(_))));
}

#[test]
fn event_mapping_tokens() {
    assert_tokens(
        &EventMapping::new("onSeek", "seeked"),
        &[
            Token::Struct {
                name: "EventMapping",
                len: 2,
            },
            Token::Str("action"),
            Token::Str("onSeek"),
            Token::Str("event"),
            Token::Str("seeked"),
            Token::StructEnd,
        ],
    );
}
