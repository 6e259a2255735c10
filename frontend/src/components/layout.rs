use crate::{
    api::UserRole,
    state::auth::{self, use_auth},
};
use leptos::*;

pub type NavLink = (&'static str, &'static str);

const PUBLIC_LINKS: &[NavLink] = &[
    ("/", "Home"),
    ("/disasterupdates", "Disaster Updates"),
    ("/emergencyinfo", "Emergency Info"),
    ("/contact", "Contact"),
    ("/login", "Login"),
    ("/register", "Register"),
];

const CITIZEN_LINKS: &[NavLink] = &[
    ("/home", "Home"),
    ("/disasterupdates", "Disaster Updates"),
    ("/submitrequest", "Request Help"),
    ("/resourcerequest", "Resources"),
    ("/volunteer", "Volunteer"),
    ("/usernotifications", "Notifications"),
    ("/profile", "Profile"),
];

const VOLUNTEER_LINKS: &[NavLink] = &[
    ("/volunteer/home", "Home"),
    ("/volunteer/tasks", "My Tasks"),
    ("/volunteer/volunteernotification", "Notifications"),
    ("/volunteer/profile", "Profile"),
];

const ADMIN_LINKS: &[NavLink] = &[
    ("/admin", "Dashboard"),
    ("/admin/taskrequests", "Task Requests"),
    ("/admin/resourcerequests", "Resource Requests"),
    ("/admin/resources", "Resources"),
    ("/admin/volunteerapplications", "Applications"),
    ("/admin/volunteers", "Volunteers"),
    ("/admin/usermanagement", "Users"),
    ("/admin/notifications", "Notifications"),
    ("/admin/updates", "Disasters"),
    ("/admin/feedback", "Feedback"),
    ("/admin/settings", "Settings"),
];

pub fn nav_links(role: Option<UserRole>) -> &'static [NavLink] {
    match role {
        None => PUBLIC_LINKS,
        Some(UserRole::User) => CITIZEN_LINKS,
        Some(UserRole::Volunteer) => VOLUNTEER_LINKS,
        Some(UserRole::Admin) => ADMIN_LINKS,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let role = create_memo(move |_| auth.get().role());
    let display_name = move || {
        auth.get()
            .session
            .map(|s| s.name)
            .filter(|name| !name.is_empty())
    };
    let on_logout = auth::use_logout();
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let links = move |mobile: bool| {
        nav_links(role.get())
            .iter()
            .map(|(href, label)| {
                let class = if mobile {
                    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                } else {
                    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                };
                view! {
                    <a href=*href class=class on:click=move |_| set_menu_open.set(false)>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-fg">"Rakshak"</h1>
                        {move || display_name().map(|name| view! {
                            <span class="hidden sm:inline text-sm text-fg-muted">{name}</span>
                        })}
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-2">
                            {move || links(false)}
                            <Show when=move || role.get().is_some()>
                                <button
                                    on:click=move |_| on_logout.call(())
                                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                >
                                    "Logout"
                                </button>
                            </Show>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || links(true)}
                            <Show when=move || role.get().is_some()>
                                <button
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        on_logout.call(());
                                    }
                                    class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                >
                                    "Logout"
                                </button>
                            </Show>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn PageTitle(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            {subtitle.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

/// Centered card used by the signed-out account screens.
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{title}</h2>
                    {subtitle.map(|text| view! {
                        <p class="mt-2 text-center text-sm text-fg-muted">{text}</p>
                    })}
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
