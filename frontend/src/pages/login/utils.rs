use crate::api::LoginRequest;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.get_untracked().trim().to_string(),
            password: self.password.get_untracked(),
        }
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}
