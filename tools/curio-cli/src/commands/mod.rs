//! CLI commands.

mod account;
mod browse;
mod cart;

pub use account::{run_login, run_logout, run_whoami, LoginArgs};
pub use browse::{run_browse, BrowseArgs};
pub use cart::{
    run_add, run_checkout, run_clear, run_purchases, run_remove, run_show, run_update, AddArgs,
    RemoveArgs, UpdateArgs,
};
