//! Browser session persistence.
//!
//! The signed-in identity lives in `sessionStorage` and is mirrored into
//! SameSite=Lax cookies so a new tab can pick it up again. On load the
//! session is rebuilt from `sessionStorage` first and from cookies second.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashMap;
use thiserror::Error;

use crate::{
    api::{LoginResponse, UserRole},
    utils::storage as storage_utils,
};

pub const USER_ID_KEY: &str = "userId";
pub const USER_ROLE_KEY: &str = "userRole";
pub const USER_NAME_KEY: &str = "userName";
pub const EMAIL_KEY: &str = "loggedInEmail";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

pub const SESSION_KEYS: [&str; 5] = [
    USER_ID_KEY,
    USER_ROLE_KEY,
    USER_NAME_KEY,
    EMAIL_KEY,
    ACCESS_TOKEN_KEY,
];

const COOKIE_MAX_AGE_SECS: u32 = 24 * 60 * 60;

// Cookie values may not carry separators, whitespace or quotes.
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("missing session value: {0}")]
    Missing(&'static str),
    #[error("invalid user id: {0}")]
    InvalidUserId(String),
    #[error("Invalid user role")]
    UnknownRole(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub access_token: String,
}

impl Session {
    pub fn from_login(response: &LoginResponse) -> Result<Self, SessionError> {
        let role = UserRole::parse(&response.role)
            .ok_or_else(|| SessionError::UnknownRole(response.role.clone()))?;
        Ok(Self {
            user_id: response.user_id,
            role,
            name: response.name.clone(),
            email: response.email.clone(),
            access_token: response.access_token.clone(),
        })
    }

    /// Rebuilds a session from any key/value source. Name and email may be absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SessionError> {
        let raw_id = lookup(USER_ID_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or(SessionError::Missing(USER_ID_KEY))?;
        let user_id = raw_id
            .trim()
            .parse::<i64>()
            .map_err(|_| SessionError::InvalidUserId(raw_id.clone()))?;
        let raw_role = lookup(USER_ROLE_KEY).ok_or(SessionError::Missing(USER_ROLE_KEY))?;
        let role =
            UserRole::parse(&raw_role).ok_or_else(|| SessionError::UnknownRole(raw_role.clone()))?;
        let access_token = lookup(ACCESS_TOKEN_KEY)
            .filter(|v| !v.is_empty())
            .ok_or(SessionError::Missing(ACCESS_TOKEN_KEY))?;
        Ok(Self {
            user_id,
            role,
            name: lookup(USER_NAME_KEY).unwrap_or_default(),
            email: lookup(EMAIL_KEY).unwrap_or_default(),
            access_token,
        })
    }

    pub fn entries(&self) -> [(&'static str, String); 5] {
        [
            (USER_ID_KEY, self.user_id.to_string()),
            (USER_ROLE_KEY, self.role.as_str().to_string()),
            (USER_NAME_KEY, self.name.clone()),
            (EMAIL_KEY, self.email.clone()),
            (ACCESS_TOKEN_KEY, self.access_token.clone()),
        ]
    }
}

pub fn parse_cookie_header(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = percent_decode_str(value.trim())
                .decode_utf8()
                .ok()?
                .into_owned();
            Some((key.to_string(), value))
        })
        .collect()
}

pub fn cookie_assignment(key: &str, value: &str) -> String {
    format!(
        "{}={}; path=/; max-age={}; SameSite=Lax",
        key,
        utf8_percent_encode(value, COOKIE_VALUE),
        COOKIE_MAX_AGE_SECS
    )
}

pub fn cookie_removal(key: &str) -> String {
    format!("{}=; path=/; max-age=0; SameSite=Lax", key)
}

fn read_session_storage() -> Option<Session> {
    let storage = storage_utils::session_storage().ok()?;
    Session::from_lookup(|key| storage.get_item(key).ok().flatten()).ok()
}

fn read_cookies() -> Option<Session> {
    let document = storage_utils::html_document().ok()?;
    let cookies = parse_cookie_header(&document.cookie().ok()?);
    Session::from_lookup(|key| cookies.get(key).cloned()).ok()
}

fn write_session_storage(session: &Session) {
    if let Ok(storage) = storage_utils::session_storage() {
        for (key, value) in session.entries() {
            let _ = storage.set_item(key, &value);
        }
    }
}

fn write_cookies(session: &Session) {
    if let Ok(document) = storage_utils::html_document() {
        for (key, value) in session.entries() {
            let _ = document.set_cookie(&cookie_assignment(key, &value));
        }
    }
}

pub fn load() -> Option<Session> {
    if let Some(session) = read_session_storage() {
        return Some(session);
    }
    let session = read_cookies()?;
    write_session_storage(&session);
    Some(session)
}

pub fn save(session: &Session) {
    write_session_storage(session);
    write_cookies(session);
}

pub fn clear() {
    if let Ok(storage) = storage_utils::session_storage() {
        for key in SESSION_KEYS {
            let _ = storage.remove_item(key);
        }
    }
    if let Ok(document) = storage_utils::html_document() {
        for key in SESSION_KEYS {
            let _ = document.set_cookie(&cookie_removal(key));
        }
    }
}

pub fn access_token() -> Option<String> {
    load().map(|session| session.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserStatus;

    fn login_response(role: &str) -> LoginResponse {
        LoginResponse {
            success: true,
            message: "Login successful".into(),
            user_id: 12,
            role: role.into(),
            name: "Asha Menon".into(),
            email: "asha@example.com".into(),
            user_status: UserStatus::Active,
            access_token: "header.payload.sig".into(),
        }
    }

    #[test]
    fn login_with_known_role_builds_session() {
        let session = Session::from_login(&login_response("volunteer")).unwrap();
        assert_eq!(session.role, UserRole::Volunteer);
        assert_eq!(session.user_id, 12);
    }

    #[test]
    fn login_with_unknown_role_is_rejected() {
        let err = Session::from_login(&login_response("Guest")).unwrap_err();
        assert_eq!(err, SessionError::UnknownRole("Guest".into()));
        assert_eq!(err.to_string(), "Invalid user role");
    }

    #[test]
    fn lookup_requires_id_role_and_token() {
        let session = Session::from_login(&login_response("Admin")).unwrap();
        let entries: HashMap<_, _> = session.entries().into_iter().collect();
        let restored = Session::from_lookup(|k| entries.get(k).cloned()).unwrap();
        assert_eq!(restored, session);

        let missing_token = Session::from_lookup(|k| {
            (k != ACCESS_TOKEN_KEY).then(|| entries.get(k).cloned()).flatten()
        });
        assert_eq!(missing_token, Err(SessionError::Missing(ACCESS_TOKEN_KEY)));

        let bad_id = Session::from_lookup(|k| {
            if k == USER_ID_KEY {
                Some("abc".into())
            } else {
                entries.get(k).cloned()
            }
        });
        assert!(matches!(bad_id, Err(SessionError::InvalidUserId(_))));
    }

    #[test]
    fn cookie_values_survive_encoding() {
        let assignment = cookie_assignment(USER_NAME_KEY, "Asha Menon; admin");
        assert!(assignment.contains("SameSite=Lax"));
        assert!(assignment.starts_with("userName=Asha%20Menon%3B%20admin;"));

        let header = "userId=12; userName=Asha%20Menon%3B%20admin; theme=dark";
        let parsed = parse_cookie_header(header);
        assert_eq!(parsed.get(USER_ID_KEY).map(String::as_str), Some("12"));
        assert_eq!(
            parsed.get(USER_NAME_KEY).map(String::as_str),
            Some("Asha Menon; admin")
        );
    }

    #[test]
    fn cookie_removal_expires_immediately() {
        assert_eq!(
            cookie_removal(ACCESS_TOKEN_KEY),
            "accessToken=; path=/; max-age=0; SameSite=Lax"
        );
    }

    #[test]
    fn storage_is_unavailable_on_host() {
        assert!(load().is_none());
        assert!(access_token().is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample() -> Session {
        Session {
            user_id: 3,
            role: UserRole::User,
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            access_token: "token-3".into(),
        }
    }

    #[wasm_bindgen_test]
    fn save_then_load_then_clear() {
        clear();
        assert!(load().is_none());
        save(&sample());
        assert_eq!(load(), Some(sample()));
        clear();
        assert!(load().is_none());
    }

    #[wasm_bindgen_test]
    fn cookies_restore_session_storage() {
        clear();
        save(&sample());
        let storage = storage_utils::session_storage().unwrap();
        for key in SESSION_KEYS {
            storage.remove_item(key).unwrap();
        }
        assert_eq!(load(), Some(sample()));
        assert_eq!(
            storage.get_item(USER_ID_KEY).unwrap().as_deref(),
            Some("3")
        );
        clear();
    }
}
