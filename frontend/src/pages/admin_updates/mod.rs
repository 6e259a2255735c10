use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminUpdatesPanel;

#[component]
pub fn AdminUpdatesPage() -> impl IntoView {
    view! { <AdminUpdatesPanel /> }
}
