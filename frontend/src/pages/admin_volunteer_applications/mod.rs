use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminVolunteerApplicationsPanel;

#[component]
pub fn AdminVolunteerApplicationsPage() -> impl IntoView {
    view! { <AdminVolunteerApplicationsPanel /> }
}
