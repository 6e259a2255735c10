use crate::{
    api::ApiClient,
    components::layout::{ErrorMessage, Layout, LoadingSpinner},
    pages::home::{
        components::{ActiveAlerts, QuickActions},
        repository::HomeRepository,
    },
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

/// Public front page. Signed-in visitors get a shortcut to their dashboard.
#[component]
pub fn LandingPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = HomeRepository::new_with_client(Rc::new(api));
    let alerts = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_active_disasters().await }
        },
    );
    let home_link = move || auth.get().role().map(|role| role.home_path());

    view! {
        <Layout>
            <section class="text-center py-12">
                <h1 class="text-4xl font-extrabold text-fg">"Rakshak"</h1>
                <p class="mt-3 text-lg text-fg-muted">
                    "Connecting people in need with volunteers and relief resources during disasters."
                </p>
                <div class="mt-6 flex justify-center gap-3">
                    {move || match home_link() {
                        Some(href) => view! {
                            <a href=href class="px-5 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg">
                                "Go to dashboard"
                            </a>
                        }
                        .into_view(),
                        None => view! {
                            <a href="/register" class="px-5 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg">
                                "Get started"
                            </a>
                            <a href="/login" class="px-5 py-2 rounded-md text-sm font-medium border border-border text-fg">
                                "Sign in"
                            </a>
                        }
                        .into_view(),
                    }}
                </div>
            </section>
            <div class="space-y-8">
                <QuickActions />
                <section class="bg-surface-elevated shadow rounded-lg p-6">
                    <h3 class="text-lg font-semibold text-fg mb-4">"Active disaster alerts"</h3>
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || alerts.get().map(|result| match result {
                            Ok(list) => view! { <ActiveAlerts disasters=list /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })}
                    </Suspense>
                    <a href="/disasterupdates" class="mt-4 inline-block text-sm font-medium text-link hover:text-link-hover">
                        "All disaster updates"
                    </a>
                </section>
            </div>
        </Layout>
    }
}
