use super::{repository::RegisterRepository, utils::RegisterForm};
use crate::api::{ApiClient, ApiError, UserResponse};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RwSignal<RegisterForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub registered: RwSignal<Option<String>>,
    pub register_action: Action<RegisterForm, Result<UserResponse, ApiError>>,
}

pub fn use_register_view_model() -> RegisterViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = RegisterRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(RegisterForm::default());
    let error = create_rw_signal(None);
    let registered = create_rw_signal(None);

    let register_action = create_action(move |value: &RegisterForm| {
        let repo = repository.clone();
        let value = value.clone();
        async move {
            let payload = value.validate()?;
            repo.register(payload).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(user) => {
                    log::info!("registered user {}", user.user_id);
                    error.set(None);
                    form.set(RegisterForm::default());
                    registered.set(Some(format!(
                        "Welcome, {}! Your account has been created. You can sign in now.",
                        user.name
                    )));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        registered,
        register_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn register_view_model_starts_blank() {
        with_runtime(|| {
            let vm = use_register_view_model();
            assert_eq!(vm.form.get(), RegisterForm::default());
            assert!(vm.registered.get().is_none());
        });
    }
}
