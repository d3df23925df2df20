mod control_bar;
pub use control_bar::*;

mod widget;
pub use widget::*;
