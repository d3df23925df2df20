use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Component attributes bound to the player by default.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerProperty {
    Autoplay,
    Controls,
    Fluid,
    Language,
    Logo,
    Loop,
    Muted,
    #[strum(serialize = "playbackRate")]
    PlaybackRate,
    Poster,
    Preload,
    Src,
    Volume,
    #[strum(serialize = "currentTime")]
    CurrentTime,
}

/// Player events proxied to outward actions of the same name by default.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerEvent {
    Abort,
    CanPlay,
    CanPlayThrough,
    DurationChange,
    Emptied,
    Ended,
    Error,
    LoadedData,
    LoadedMetadata,
    LoadStart,
    Pause,
    Play,
    Playing,
    Progress,
    RateChange,
    Resize,
    Seeked,
    Seeking,
    Stalled,
    Suspend,
    TimeUpdate,
    UserActive,
    UserInactive,
    VolumeChange,
    Waiting,
}
