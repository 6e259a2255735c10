use super::{repository::ResetPasswordRepository, utils::ResetPasswordForm};
use crate::api::{ApiClient, ApiError, MessageResponse};
use leptos::*;
use leptos_router::use_query_map;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub form: RwSignal<ResetPasswordForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub submit_action: Action<ResetPasswordForm, Result<MessageResponse, ApiError>>,
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));
    let query = use_query_map();

    let form = create_rw_signal(ResetPasswordForm {
        token: query
            .get_untracked()
            .get("token")
            .cloned()
            .unwrap_or_default(),
        ..ResetPasswordForm::default()
    });
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let submit_action = create_action(move |value: &ResetPasswordForm| {
        let repo = repository.clone();
        let value = value.clone();
        async move { repo.reset(&value).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => {
                    success.set(Some(resp.message));
                    error.set(None);
                    form.set(ResetPasswordForm::default());
                }
                Err(err) => {
                    error.set(Some(err));
                    success.set(None);
                }
            }
        }
    });

    ResetPasswordViewModel {
        form,
        error,
        success,
        submit_action,
    }
}
