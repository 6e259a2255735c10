use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::VolunteerApplyPanel;

#[component]
pub fn VolunteerApplyPage() -> impl IntoView {
    view! { <VolunteerApplyPanel /> }
}
