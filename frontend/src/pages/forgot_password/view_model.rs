use super::repository::ForgotPasswordRepository;
use crate::api::{ApiClient, ApiError, MessageResponse};
use crate::state::messages::MessageState;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub messages: RwSignal<MessageState>,
    pub submit_action: Action<String, Result<MessageResponse, ApiError>>,
}

impl ForgotPasswordViewModel {
    pub fn link_sent(&self) -> Option<String> {
        self.messages.with(|m| m.success.clone())
    }
}

pub fn use_forgot_password_view_model(initial_email: String) -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));

    let email = create_rw_signal(initial_email);
    let messages = create_rw_signal(MessageState::default());

    let submit_action = create_action(move |value: &String| {
        let repo = repository.clone();
        let value = value.clone();
        async move { repo.request_reset(&value).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(resp) => messages.update(|m| m.set_success(resp.message)),
                Err(err) => messages.update(|m| m.set_error(err)),
            }
        }
    });

    ForgotPasswordViewModel {
        email,
        messages,
        submit_action,
    }
}
