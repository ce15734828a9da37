pub mod api;
pub mod config;
pub mod report;
pub mod source;

pub use self::{api::TicketStats, config::Config};
