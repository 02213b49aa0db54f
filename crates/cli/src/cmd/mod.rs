mod add;
mod check;
mod info;

pub use add::cmd_add;
pub use check::cmd_check;
pub use info::cmd_info;
