pub mod msg;

mod attrs;
pub use attrs::*;

mod render_loop;
pub use render_loop::*;
