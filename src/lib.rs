//! Support ticket tracking service.
//!
//! Clients register and submit tickets; support staff triage every ticket,
//! change its status and assign it to a colleague. Exposed as a JSON API.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod tickets;
pub mod validators;
