pub mod binder;
pub mod event_proxy;
pub mod ivy_videojs;
pub mod overlay;
pub mod player_component;
pub mod skip;
