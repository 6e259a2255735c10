use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
mod view_model;

pub use panel::ProfilePanel;

/// Shared by `/profile`, `/volunteer/profile` and `/admin/settings`.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <ProfilePanel /> }
}
