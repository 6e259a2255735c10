use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub role: String,
    pub exp: i64,    // expiration time
    pub iat: i64,    // issued at
    pub jti: String, // JWT ID
}

impl Claims {
    pub fn new(user_id: i64, email: String, role: String, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user_id.to_string(),
            email,
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn user_id(&self) -> anyhow::Result<i64> {
        self.sub
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid subject claim: {}", self.sub))
    }
}

pub fn create_access_token(
    user_id: i64,
    email: String,
    role: String,
    secret: &str,
    expiration_hours: u64,
) -> anyhow::Result<String> {
    let claims = Claims::new(user_id, email, role, expiration_hours);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

pub fn verify_access_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_round_trips_claims() {
        let token = create_access_token(42, "asha@example.com".into(), "Volunteer".into(), "secret", 1)
            .expect("create token");
        let claims = verify_access_token(&token, "secret").expect("verify token");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.email, "asha@example.com");
        assert_eq!(claims.role, "Volunteer");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = create_access_token(1, "a@b.c".into(), "User".into(), "secret", 1).unwrap();
        assert!(verify_access_token(&token, "other-secret").is_err());
    }

    #[test]
    fn non_numeric_subject_is_an_error() {
        let mut claims = Claims::new(1, "a@b.c".into(), "User".into(), 1);
        claims.sub = "abc".into();
        assert!(claims.user_id().is_err());
    }
}
