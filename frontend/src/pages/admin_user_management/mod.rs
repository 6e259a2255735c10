use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminUserManagementPanel;

#[component]
pub fn AdminUserManagementPage() -> impl IntoView {
    view! { <AdminUserManagementPanel /> }
}
