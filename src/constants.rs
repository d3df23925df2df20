use crate::types::controls::{ActionTarget, WidgetDescriptor};

pub const READY_ACTION: &str = "ready";
pub const SWITCH_MEDIA_ACTION: &str = "switchMedia";
pub const SKIP_FORWARD_ACTION: &str = "skipForward";
pub const SKIP_BACKWARD_ACTION: &str = "skipBackward";
pub const CURRENT_TIME_PROPERTY: &str = "currentTime";
pub const SWITCH_MEDIA_ENABLED_ATTR: &str = "switchMediaEnabled";
pub const SECONDS_TO_SKIP_ATTR: &str = "secondsToSkip";
pub const DEFAULT_SECONDS_TO_SKIP: f64 = 10.0;
pub const BUTTON_CSS_CLASS: &str = "vjs-control vjs-button";

pub const SWITCH_MEDIA_BUTTON: WidgetDescriptor = WidgetDescriptor {
    id: "SwitchMediaButton",
    css_class: "vjs-switch-media-button",
    action: SWITCH_MEDIA_ACTION,
    target: ActionTarget::Outward,
};
pub const SKIP_FORWARD_BUTTON: WidgetDescriptor = WidgetDescriptor {
    id: "SkipForwardButton",
    css_class: "vjs-skip-forward icon pref10",
    action: SKIP_FORWARD_ACTION,
    target: ActionTarget::Component,
};
pub const SKIP_BACKWARD_BUTTON: WidgetDescriptor = WidgetDescriptor {
    id: "SkipBackwardButton",
    css_class: "vjs-skip-back icon next10",
    action: SKIP_BACKWARD_ACTION,
    target: ActionTarget::Component,
};
