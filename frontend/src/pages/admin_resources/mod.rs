use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminResourcesPanel;

#[component]
pub fn AdminResourcesPage() -> impl IntoView {
    view! { <AdminResourcesPanel /> }
}
