use leptos::*;

mod panel;

pub use panel::AdminVolunteersPanel;

#[component]
pub fn AdminVolunteersPage() -> impl IntoView {
    view! { <AdminVolunteersPanel /> }
}
