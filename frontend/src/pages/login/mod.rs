use leptos::*;

pub mod repository;
pub mod utils;
mod panel;
mod view_model;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <LoginPanel /> }
}
