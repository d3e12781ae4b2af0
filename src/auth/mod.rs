pub mod accounts;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;
