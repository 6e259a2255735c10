use leptos::*;

pub mod components;
mod panel;
pub mod repository;
pub mod utils;

pub use panel::HomePanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <HomePanel /> }
}
