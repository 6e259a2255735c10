use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::AdminDashboardPanel;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <AdminDashboardPanel /> }
}
