use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{Duration, Utc};

use crate::models::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub email: String,
    pub role: String,
    pub sid: String, // session id
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user: &User, session_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(session_hours);

        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            sid: Uuid::new_v4().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        }
    }
}

pub fn create_token(
    user: &User,
    secret: &str,
    session_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims::new(user, session_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user() -> User {
        User {
            id: "2".to_string(),
            name: "Lisa Chen".to_string(),
            email: "manager@tnt-transport.com".to_string(),
            role: Role::Manager,
            password_hash: String::new(),
        }
    }

    #[test]
    fn test_token_round_trip_keeps_identity() {
        let token = create_token(&user(), "secret", 1).unwrap();
        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, "2");
        assert_eq!(claims.role, "manager");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_each_login_gets_its_own_session() {
        let first = verify_token(&create_token(&user(), "secret", 1).unwrap(), "secret").unwrap();
        let second = verify_token(&create_token(&user(), "secret", 1).unwrap(), "secret").unwrap();
        assert_eq!(first.sub, second.sub);
        assert_ne!(first.sid, second.sid);
        assert!(Uuid::parse_str(&first.sid).is_ok());
    }

    #[test]
    fn test_token_rejects_wrong_secret() {
        let token = create_token(&user(), "secret", 1).unwrap();
        assert!(verify_token(&token, "other").is_err());
    }

    #[test]
    fn test_password_hash_verifies() {
        let hash = hash_password("manager123", 4).unwrap();
        assert!(verify_password("manager123", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }
}
