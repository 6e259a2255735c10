use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::ContactPanel;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <ContactPanel /> }
}
