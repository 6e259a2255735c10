use super::{repository::ProfileRepository, utils::ProfileForm};
use crate::{
    api::{ApiClient, ApiError, UserResponse},
    state::{
        auth::{use_auth, AuthState},
        session,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub profile: Resource<Option<i64>, Result<UserResponse, ApiError>>,
    pub current: RwSignal<Option<UserResponse>>,
    pub form: RwSignal<ProfileForm>,
    pub editing: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub save_action: Action<ProfileForm, Result<UserResponse, ApiError>>,
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let (auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ProfileRepository::new_with_client(Rc::new(api));

    let current = create_rw_signal(None::<UserResponse>);
    let form = create_rw_signal(ProfileForm::default());
    let editing = create_rw_signal(false);
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let repo_for_fetch = repository.clone();
    let profile = create_resource(
        move || auth.get().user_id(),
        move |user_id| {
            let repo = repo_for_fetch.clone();
            async move {
                match user_id {
                    Some(id) => repo.fetch(id).await,
                    None => Err(ApiError::unknown("Not signed in")),
                }
            }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(user)) = profile.get() {
            form.set(ProfileForm::from(&user));
            current.set(Some(user));
        }
    });

    let save_action = create_action(move |value: &ProfileForm| {
        let repo = repository.clone();
        let value = value.clone();
        let snapshot = current.get_untracked();
        async move {
            let user = snapshot.ok_or_else(|| ApiError::unknown("Profile not loaded"))?;
            let update = value.changes_from(&user)?;
            repo.update(user.user_id, update).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(user) => {
                    // Keep the header and persisted session in step with the new name/email.
                    if let Some(mut s) = auth.get_untracked().session {
                        s.name = user.name.clone();
                        s.email = user.email.clone();
                        session::save(&s);
                        set_auth.set(AuthState::signed_in(s));
                    }
                    form.set(ProfileForm::from(&user));
                    current.set(Some(user));
                    editing.set(false);
                    error.set(None);
                    success.set(Some("Profile updated.".into()));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    ProfileViewModel {
        profile,
        current,
        form,
        editing,
        error,
        success,
        save_action,
    }
}
