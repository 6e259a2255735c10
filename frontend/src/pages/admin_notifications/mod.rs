use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminNotificationsPanel;

#[component]
pub fn AdminNotificationsPage() -> impl IntoView {
    view! { <AdminNotificationsPanel /> }
}
