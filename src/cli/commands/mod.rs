mod init;
mod list;
mod migrate;

pub use init::cmd_init;
pub use list::cmd_list_incidents;
pub use migrate::cmd_migrate;
