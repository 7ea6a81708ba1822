mod compose;
mod info;
mod touch;
mod version_bump;

pub use compose::{ComposeArgs, cmd_compose};
pub use info::cmd_info;
pub use touch::cmd_touch;
pub use version_bump::cmd_version_bump;
