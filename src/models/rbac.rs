use serde::{Deserialize, Serialize};

use super::user::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub resource: String,
    pub actions: Vec<String>,
}

impl Permission {
    fn new(resource: &str, actions: &[&str]) -> Self {
        Self {
            resource: resource.to_string(),
            actions: actions.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn allows(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.actions.iter().any(|a| a == action)
    }

    /// Flattened `resource:action` keys, e.g. `analytics:read`.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.actions
            .iter()
            .map(move |action| format!("{}:{}", self.resource, action))
    }
}

pub fn role_permissions(role: Role) -> Vec<Permission> {
    match role {
        Role::Admin => vec![
            Permission::new("leads", &["read", "write", "delete"]),
            Permission::new("users", &["read", "write", "delete"]),
            Permission::new("analytics", &["read"]),
            Permission::new("settings", &["read", "write"]),
            Permission::new("communications", &["read", "write"]),
        ],
        Role::Manager => vec![
            Permission::new("leads", &["read", "write"]),
            Permission::new("analytics", &["read"]),
            Permission::new("communications", &["read", "write"]),
        ],
        Role::Dispatcher => vec![
            Permission::new("leads", &["read", "write"]),
            Permission::new("communications", &["read", "write"]),
        ],
    }
}

pub fn has_permission(permissions: &[Permission], resource: &str, action: &str) -> bool {
    permissions.iter().any(|p| p.allows(resource, action))
}

pub fn permission_keys(permissions: &[Permission]) -> Vec<String> {
    permissions.iter().flat_map(|p| p.keys()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_reads_analytics_but_not_users() {
        let perms = role_permissions(Role::Manager);
        assert!(has_permission(&perms, "analytics", "read"));
        assert!(!has_permission(&perms, "users", "read"));
        assert!(!has_permission(&perms, "leads", "delete"));
    }

    #[test]
    fn test_dispatcher_has_no_analytics() {
        let perms = role_permissions(Role::Dispatcher);
        assert!(!has_permission(&perms, "analytics", "read"));
        assert!(has_permission(&perms, "communications", "write"));
    }

    #[test]
    fn test_permission_keys_are_flattened() {
        let keys = permission_keys(&role_permissions(Role::Admin));
        assert!(keys.contains(&"settings:write".to_string()));
        assert!(keys.contains(&"leads:delete".to_string()));
        assert_eq!(keys.len(), 11);
    }
}
