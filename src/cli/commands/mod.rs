//! Command implementations for the Sikt CLI.

mod add;
mod config;
mod curate;
mod doctor;
mod domains;
mod init;
mod list;
mod render;

pub use add::run_add;
pub use config::run_config;
pub use curate::run_curate;
pub use doctor::run_doctor;
pub use domains::run_domains;
pub use init::run_init;
pub use list::run_list;
pub use render::run_render;
