pub mod ticket;

pub use self::ticket::Stats as TicketStats;
