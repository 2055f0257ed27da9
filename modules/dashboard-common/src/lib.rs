pub mod config;
pub mod view;

pub use config::Config;
pub use view::{Ticket, ViewState, ViewStatus};
