use crate::api::{UpdateUser, UserResponse, UserRole};
use crate::utils::text::matches_search;

pub const ROLE_FILTER_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub role: String,
}

impl Default for UserFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            role: ROLE_FILTER_ALL.to_string(),
        }
    }
}

impl UserFilter {
    pub fn matches(&self, user: &UserResponse) -> bool {
        let role_ok = self.role == ROLE_FILTER_ALL
            || UserRole::parse(&self.role).is_some_and(|role| role == user.role);
        role_ok && matches_search(&self.search, &[&user.name, &user.email])
    }

    /// Keeps matching users sorted by name.
    pub fn apply(&self, users: Vec<UserResponse>) -> Vec<UserResponse> {
        let mut kept: Vec<UserResponse> = users.into_iter().filter(|u| self.matches(u)).collect();
        kept.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        kept
    }
}

pub fn role_filter_options() -> Vec<(String, String)> {
    std::iter::once((ROLE_FILTER_ALL.to_string(), "All roles".to_string()))
        .chain(
            UserRole::ALL
                .iter()
                .map(|role| (role.as_str().to_string(), role.as_str().to_string())),
        )
        .collect()
}

pub fn volunteers_only(users: Vec<UserResponse>) -> Vec<UserResponse> {
    UserFilter {
        role: UserRole::Volunteer.as_str().to_string(),
        ..Default::default()
    }
    .apply(users)
}

/// Update that flips a user between active and blocked.
pub fn status_toggle(user: &UserResponse) -> UpdateUser {
    UpdateUser {
        user_status: Some(user.user_status.toggled()),
        ..Default::default()
    }
}

/// Update for a role change, or `None` when the role is unchanged or unknown.
pub fn role_change(user: &UserResponse, raw_role: &str) -> Option<UpdateUser> {
    let role = UserRole::parse(raw_role)?;
    (role != user.role).then(|| UpdateUser {
        role: Some(role),
        ..Default::default()
    })
}

/// Admins may not remove their own account.
pub fn can_delete(user: &UserResponse, current_user_id: Option<i64>) -> bool {
    current_user_id != Some(user.user_id)
}

#[cfg(test)]
pub(crate) fn user(id: i64, name: &str, role: UserRole) -> UserResponse {
    UserResponse {
        user_id: id,
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone_number: String::new(),
        location: "Kochi".into(),
        role,
        user_status: Default::default(),
        created_at: chrono::Utc::now(),
    }
}
