use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminTaskRequestsPanel;

#[component]
pub fn AdminTaskRequestsPage() -> impl IntoView {
    view! { <AdminTaskRequestsPanel /> }
}
