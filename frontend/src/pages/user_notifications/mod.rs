use leptos::*;

mod panel;
pub mod repository;
pub mod utils;

pub use panel::UserNotificationsPanel;

/// Role feed, shared by `/usernotifications` and `/volunteer/volunteernotification`.
#[component]
pub fn UserNotificationsPage() -> impl IntoView {
    view! { <UserNotificationsPanel /> }
}
