mod accessor;
pub use accessor::*;

mod emitter;
pub use emitter::*;

mod player_error;
pub use player_error::*;

mod player_handle;
pub use player_handle::*;

mod player_property;
pub use player_property::*;
