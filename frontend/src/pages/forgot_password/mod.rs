use leptos::*;
use leptos_router::use_query_map;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

mod panel;
mod repository;
mod view_model;

pub use panel::ForgotPasswordPanel;

const FORGOT_PASSWORD_PATH: &str = "/forgotpassword";

/// Link to the reset form, carrying whatever the user already typed at login.
pub fn forgot_password_href(email: &str) -> String {
    let email = email.trim();
    if email.is_empty() {
        return FORGOT_PASSWORD_PATH.to_string();
    }
    format!(
        "{}?email={}",
        FORGOT_PASSWORD_PATH,
        utf8_percent_encode(email, NON_ALPHANUMERIC)
    )
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let initial_email = query
        .get_untracked()
        .get("email")
        .cloned()
        .unwrap_or_default();
    view! { <ForgotPasswordPanel initial_email=initial_email /> }
}
