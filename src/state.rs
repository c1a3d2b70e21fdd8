use std::sync::Arc;

use chrono::Utc;

use crate::{
    config::AppConfig,
    models::{Role, User},
    store::SampleData,
    utils::{hash_password, verify_password},
};

/// Shared, read-only application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<SampleData>,
    pub users: Arc<UserDirectory>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, bcrypt::BcryptError> {
        Self::with_data(config, SampleData::generate(Utc::now()))
    }

    pub fn with_data(config: AppConfig, data: SampleData) -> Result<Self, bcrypt::BcryptError> {
        let users = UserDirectory::demo(config.bcrypt_cost)?;
        Ok(Self {
            data: Arc::new(data),
            users: Arc::new(users),
            config: Arc::new(config),
        })
    }
}

const DEMO_ACCOUNTS: [(&str, &str, &str, Role, &str); 3] = [
    ("1", "John Martinez", "admin@tnt-transport.com", Role::Admin, "admin123"),
    ("2", "Lisa Chen", "manager@tnt-transport.com", Role::Manager, "manager123"),
    ("3", "Mike Rodriguez", "dispatcher@tnt-transport.com", Role::Dispatcher, "dispatcher123"),
];

/// The fixed set of accounts the demo login accepts.
#[derive(Debug)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn demo(cost: u32) -> Result<Self, bcrypt::BcryptError> {
        let users = DEMO_ACCOUNTS
            .iter()
            .map(|(id, name, email, role, password)| {
                Ok(User {
                    id: id.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    role: *role,
                    password_hash: hash_password(password, cost)?,
                })
            })
            .collect::<Result<Vec<_>, bcrypt::BcryptError>>()?;

        Ok(Self { users })
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// `Ok(None)` for an unknown email or a wrong password.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, bcrypt::BcryptError> {
        let user = match self.find_by_email(email) {
            Some(user) => user,
            None => return Ok(None),
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(user.clone()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_accounts_authenticate() {
        let users = UserDirectory::demo(4).unwrap();
        let manager = users
            .authenticate("Manager@TNT-transport.com", "manager123")
            .unwrap()
            .unwrap();
        assert_eq!(manager.name, "Lisa Chen");
        assert_eq!(manager.role, Role::Manager);
    }

    #[test]
    fn test_wrong_password_or_unknown_email() {
        let users = UserDirectory::demo(4).unwrap();
        assert!(users.authenticate("admin@tnt-transport.com", "nope").unwrap().is_none());
        assert!(users.authenticate("ghost@tnt-transport.com", "admin123").unwrap().is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let users = UserDirectory::demo(4).unwrap();
        assert_eq!(users.find_by_id("3").map(|u| u.role), Some(Role::Dispatcher));
        assert!(users.find_by_id("9").is_none());
    }
}
