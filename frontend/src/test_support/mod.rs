#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserRole;
    use crate::state::auth::AuthState;
    use crate::state::session::Session;
    use leptos::*;

    pub fn session_for(role: UserRole) -> Session {
        let user_id = match role {
            UserRole::User => 1,
            UserRole::Volunteer => 2,
            UserRole::Admin => 3,
        };
        Session {
            user_id,
            role,
            name: format!("{} Tester", role),
            email: format!("{}@example.com", role.as_str().to_lowercase()),
            access_token: "test-token".into(),
        }
    }

    pub fn provide_session(role: UserRole) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState::signed_in(session_for(role)));
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
