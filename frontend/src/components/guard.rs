use crate::{
    api::UserRole,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::storage,
};
use leptos::*;

/// Which roles a guarded route admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    AnyRole,
    Volunteer,
    Admin,
}

impl Access {
    pub fn admits(&self, role: UserRole) -> bool {
        match self {
            Access::AnyRole => true,
            Access::Volunteer => role.can_act_as_volunteer(),
            Access::Admin => role == UserRole::Admin,
        }
    }
}

/// Where a visitor is sent instead of the guarded page, if anywhere.
pub fn redirect_target(access: Access, state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match state.role() {
        Some(role) if state.is_authenticated => {
            if access.admits(role) {
                None
            } else {
                Some(role.home_path())
            }
        }
        _ => Some("/login"),
    }
}

fn should_render_children(access: Access, state: &AuthState) -> bool {
    !state.loading && state.is_authenticated && state.role().is_some_and(|role| access.admits(role))
}

fn role_guard(access: Access, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let allowed = create_memo(move |_| should_render_children(access, &auth.get()));
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        if let Some(target) = redirect_target(access, &auth.get()) {
            storage::redirect(target);
        }
    });
    view! {
        <Show
            when=move || allowed.get()
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    role_guard(Access::AnyRole, children)
}

#[component]
pub fn RequireVolunteer(children: ChildrenFn) -> impl IntoView {
    role_guard(Access::Volunteer, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    role_guard(Access::Admin, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Session;

    fn signed_in(role: UserRole) -> AuthState {
        AuthState::signed_in(Session {
            user_id: 1,
            role,
            name: "Test".into(),
            email: "test@example.com".into(),
            access_token: "t".into(),
        })
    }

    #[test]
    fn anonymous_visitors_go_to_login() {
        let anon = AuthState::default();
        assert_eq!(redirect_target(Access::AnyRole, &anon), Some("/login"));
        assert_eq!(redirect_target(Access::Admin, &anon), Some("/login"));
        assert!(!should_render_children(Access::AnyRole, &anon));
    }

    #[test]
    fn wrong_role_goes_to_its_own_home() {
        assert_eq!(
            redirect_target(Access::Admin, &signed_in(UserRole::Volunteer)),
            Some("/volunteer/home")
        );
        assert_eq!(
            redirect_target(Access::Volunteer, &signed_in(UserRole::User)),
            Some("/home")
        );
    }

    #[test]
    fn admins_pass_volunteer_guard() {
        let admin = signed_in(UserRole::Admin);
        assert_eq!(redirect_target(Access::Volunteer, &admin), None);
        assert!(should_render_children(Access::Volunteer, &admin));
        assert!(should_render_children(Access::Admin, &admin));
    }

    #[test]
    fn loading_state_neither_renders_nor_redirects() {
        let mut loading = signed_in(UserRole::Admin);
        loading.loading = true;
        assert_eq!(redirect_target(Access::Admin, &loading), None);
        assert!(!should_render_children(Access::Admin, &loading));
    }
}
