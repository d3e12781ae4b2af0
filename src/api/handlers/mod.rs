pub mod auth;
pub mod dashboard;
pub mod health;
pub mod index;
pub mod tickets;
pub mod users;
