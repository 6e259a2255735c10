use leptos::*;

pub mod components;
mod panel;
pub mod repository;
pub mod utils;

pub use panel::VolunteerTasksPanel;

#[component]
pub fn VolunteerTasksPage() -> impl IntoView {
    view! { <VolunteerTasksPanel /> }
}
