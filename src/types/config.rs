use crate::constants::DEFAULT_SECONDS_TO_SKIP;
use crate::types::player::{PlayerEvent, PlayerProperty};
use serde::{Deserialize, Deserializer, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid player config: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Outward action sent whenever the player emits `event`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct EventMapping {
    pub action: String,
    pub event: String,
}

impl EventMapping {
    pub fn new(action: impl Into<String>, event: impl Into<String>) -> Self {
        EventMapping {
            action: action.into(),
            event: event.into(),
        }
    }
    /// Action and event share the same name.
    pub fn same(name: impl Into<String>) -> Self {
        let name = name.into();
        EventMapping {
            action: name.to_owned(),
            event: name,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerConfig {
    pub seconds_to_skip: f64,
    pub switch_media_enabled: bool,
    /// Installed in order once the player is ready. At most one mapping per
    /// action; supplied mappings are merged over the defaults.
    #[serde(deserialize_with = "deserialize_player_events")]
    pub player_events: Vec<EventMapping>,
    /// Bound in order when the high-level component receives `ready`.
    pub player_attribute_bindings: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            seconds_to_skip: DEFAULT_SECONDS_TO_SKIP,
            switch_media_enabled: false,
            player_events: PlayerEvent::iter()
                .map(|event| EventMapping::same(event.to_string()))
                .collect(),
            player_attribute_bindings: PlayerProperty::iter()
                .map(|property| property.to_string())
                .collect(),
        }
    }
}

impl PlayerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
    /// Merges `mapping` into the event mappings: an existing mapping for the
    /// same action is replaced in place, otherwise it is added last.
    pub fn with_player_event(mut self, mapping: EventMapping) -> Self {
        merge_player_event(&mut self.player_events, mapping);
        self
    }
    pub fn with_attribute_binding(mut self, property: impl Into<String>) -> Self {
        self.player_attribute_bindings.push(property.into());
        self
    }
}

fn merge_player_event(player_events: &mut Vec<EventMapping>, mapping: EventMapping) {
    match player_events
        .iter_mut()
        .find(|existing| existing.action == mapping.action)
    {
        Some(existing) => *existing = mapping,
        None => player_events.push(mapping),
    };
}

fn deserialize_player_events<'de, D>(deserializer: D) -> Result<Vec<EventMapping>, D::Error>
where
    D: Deserializer<'de>,
{
    let supplied = Vec::<EventMapping>::deserialize(deserializer)?;
    Ok(supplied.into_iter().fold(
        PlayerConfig::default().player_events,
        |mut player_events, mapping| {
            merge_player_event(&mut player_events, mapping);
            player_events
        },
    ))
}
