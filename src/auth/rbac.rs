use crate::db::models::user::Role;

#[derive(Debug, Clone, PartialEq)]
pub enum Permission {
    SubmitTicket,
    ViewOwnTickets,
    ViewAllTickets,
    UpdateTicketStatus,
    AssignTicket,
    ListSupportStaff,
}

pub fn has_permission(role: Role, permission: &Permission) -> bool {
    match role {
        Role::Support => true,
        Role::Client => matches!(permission, Permission::SubmitTicket | Permission::ViewOwnTickets),
    }
}

pub fn is_support(role: Role) -> bool {
    role == Role::Support
}
