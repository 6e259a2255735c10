use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
mod view_model;

pub use panel::VolunteerHomePanel;

#[component]
pub fn VolunteerHomePage() -> impl IntoView {
    view! { <VolunteerHomePanel /> }
}
