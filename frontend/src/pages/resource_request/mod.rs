use leptos::*;

mod panel;
pub mod repository;
pub mod utils;
mod view_model;

pub use panel::ResourceRequestPanel;

#[component]
pub fn ResourceRequestPage() -> impl IntoView {
    view! { <ResourceRequestPanel /> }
}
