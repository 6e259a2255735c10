use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::DisasterUpdatesPanel;

#[component]
pub fn DisasterUpdatesPage() -> impl IntoView {
    view! { <DisasterUpdatesPanel /> }
}
