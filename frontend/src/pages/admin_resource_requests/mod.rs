use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminResourceRequestsPanel;

#[component]
pub fn AdminResourceRequestsPage() -> impl IntoView {
    view! { <AdminResourceRequestsPanel /> }
}
