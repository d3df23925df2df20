mod action;
pub use action::*;

mod action_sink;
pub use action_sink::*;
