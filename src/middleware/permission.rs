use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    models::{has_permission, permission_keys, role_permissions, Role, User},
    state::AppState,
    utils::verify_token,
};

pub const AUTH_COOKIE: &str = "auth_token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub permissions: Vec<String>,
    // Helper properties for templates
    pub has_analytics_access: bool,
}

impl CurrentUser {
    pub fn from_user(user: &User) -> Self {
        let permissions = permission_keys(&role_permissions(user.role));

        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            has_analytics_access: permissions.iter().any(|p| p == "analytics:read"),
            permissions,
        }
    }

    pub fn has_permission(&self, resource: &str, action: &str) -> bool {
        has_permission(&role_permissions(self.role), resource, action)
    }

    pub fn require(&self, resource: &str, action: &str) -> Result<(), AppError> {
        if self.has_permission(resource, action) {
            Ok(())
        } else {
            log::warn!("{} denied {}:{}", self.email, resource, action);
            Err(AppError::Forbidden(format!("{}:{}", resource, action)))
        }
    }
}

pub fn get_current_user(cookies: Cookies, state: &AppState) -> Option<CurrentUser> {
    let token = cookies.get(AUTH_COOKIE)?.value().to_string();

    let claims = match verify_token(&token, &state.config.jwt_secret) {
        Ok(claims) => claims,
        Err(err) => {
            log::debug!("rejected session token: {}", err);
            return None;
        }
    };

    let Some(user) = state.users.find_by_id(&claims.sub) else {
        log::debug!("session {} names unknown user {}", claims.sid, claims.sub);
        return None;
    };
    log::trace!("session {} resolved to {}", claims.sid, user.email);
    Some(CurrentUser::from_user(user))
}

/// For pages: a missing session sends the browser to the login form.
pub fn require_user(cookies: Cookies, state: &AppState) -> Result<CurrentUser, AppError> {
    get_current_user(cookies, state).ok_or(AppError::LoginRequired)
}

/// For JSON endpoints: a missing session is a plain 401.
pub fn require_api_user(cookies: Cookies, state: &AppState) -> Result<CurrentUser, AppError> {
    get_current_user(cookies, state).ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "1".to_string(),
            name: "Test".to_string(),
            email: "test@tnt-transport.com".to_string(),
            role,
            password_hash: String::new(),
        }
    }

    #[test]
    fn test_dispatcher_flags() {
        let current = CurrentUser::from_user(&user(Role::Dispatcher));
        assert!(!current.has_analytics_access);
        assert!(current.has_permission("communications", "write"));
        assert!(matches!(current.require("analytics", "read"), Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_admin_flags() {
        let current = CurrentUser::from_user(&user(Role::Admin));
        assert!(current.has_analytics_access);
        assert!(current.permissions.contains(&"settings:write".to_string()));
        assert!(current.require("leads", "delete").is_ok());
    }
}
