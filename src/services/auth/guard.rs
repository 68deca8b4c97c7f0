//! Route access rule: signed-out users go to login, non-admins are sent home
//! from admin pages.

use super::AuthSession;
use crate::services::users::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    RedirectToLogin,
    RedirectHome,
}

pub fn route_access(session: Option<&AuthSession>, requires_admin: bool) -> RouteAccess {
    match session {
        None => RouteAccess::RedirectToLogin,
        Some(s) if requires_admin && s.user.role != Role::Admin => RouteAccess::RedirectHome,
        Some(_) => RouteAccess::Allow,
    }
}
