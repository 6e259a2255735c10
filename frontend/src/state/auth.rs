use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserRole},
    pages::login::repository::LoginRepository,
    state::session::{self, Session},
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.as_ref().map(|s| s.role)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.user_id)
    }
}

fn create_auth_context() -> AuthContext {
    let initial = match session::load() {
        Some(restored) => {
            log::debug!("restored session for user {}", restored.user_id);
            AuthState::signed_in(restored)
        }
        None => AuthState::default(),
    };
    create_signal(initial)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::validation("Please fill in both email and password."));
    }
    Ok(())
}

/// Signs in, persists the session, and returns the role to route to.
pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserRole, ApiError> {
    validate_credentials(&request.email, &request.password)?;
    session::clear();
    set_auth_state.update(|state| state.loading = true);

    let outcome = repo.login(request).await.and_then(|response| {
        Session::from_login(&response).map_err(|err| ApiError::validation(err.to_string()))
    });

    match outcome {
        Ok(new_session) => {
            session::save(&new_session);
            let role = new_session.role;
            log::info!("signed in as {} ({})", new_session.user_id, role);
            set_auth_state.set(AuthState::signed_in(new_session));
            Ok(role)
        }
        Err(error) => {
            session::clear();
            set_auth_state.set(AuthState::default());
            Err(error)
        }
    }
}

pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    session::clear();
    set_auth_state.set(AuthState::default());
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserRole, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    Callback::new(move |_| {
        logout(set_auth);
        crate::utils::storage::redirect("/login");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.session.is_none());
            assert!(snapshot.role().is_none());
        });
    }

    #[test]
    fn empty_credentials_are_rejected_before_any_request() {
        let err = validate_credentials("  ", "secret").unwrap_err();
        assert_eq!(err.error, "Please fill in both email and password.");
        assert!(validate_credentials("a@b.c", "").is_err());
        assert!(validate_credentials("a@b.c", "secret").is_ok());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    fn login_body(role: &str) -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "message": "Login successful",
            "user_id": 21,
            "role": role,
            "name": "Meera",
            "email": "meera@example.com",
            "user_status": "active",
            "access_token": "jwt-token"
        })
    }

    fn request() -> LoginRequest {
        LoginRequest {
            email: "meera@example.com".into(),
            password: "secret123".into(),
        }
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200).json_body(login_body("Admin"));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

        let role = login_request(request(), &repo, set_state).await.unwrap();
        assert_eq!(role, UserRole::Admin);
        assert_eq!(role.home_path(), "/admin");

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.user_id(), Some(21));

        logout(set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.session.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn unknown_role_clears_session_and_reports_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200).json_body(login_body("Moderator"));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

        let err = login_request(request(), &repo, set_state).await.unwrap_err();
        assert_eq!(err.error, "Invalid user role");
        assert!(!state.get().is_authenticated);
        runtime.dispose();
    }

    #[tokio::test]
    async fn blocked_user_error_is_surfaced() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(403).json_body(serde_json::json!({
                "error": "This user is blocked. Please contact support.",
                "code": "FORBIDDEN"
            }));
        });

        let runtime = create_runtime();
        let (_state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

        let err = login_request(request(), &repo, set_state).await.unwrap_err();
        assert_eq!(err.code, "FORBIDDEN");
        runtime.dispose();
    }
}
