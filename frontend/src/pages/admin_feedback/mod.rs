use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminFeedbackPanel;

#[component]
pub fn AdminFeedbackPage() -> impl IntoView {
    view! { <AdminFeedbackPanel /> }
}
