//! Command implementations

mod format;
mod render;
mod table;

pub use format::cmd_format;
pub use render::cmd_render;
pub use table::cmd_table;
