pub mod ticket;
pub mod user;
