use super::{
    components::{ActiveAlerts, MyRequests, QuickActions},
    repository::HomeRepository,
    utils::newest_requests,
};
use crate::{
    api::ApiClient,
    components::layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

const RECENT_REQUESTS: usize = 5;

#[component]
pub fn HomePanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = HomeRepository::new_with_client(Rc::new(api));

    let greeting = move || {
        auth.get()
            .session
            .map(|s| format!("Welcome back, {}", s.name))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    let repo_for_alerts = repository.clone();
    let alerts = create_resource(
        || (),
        move |_| {
            let repo = repo_for_alerts.clone();
            async move { repo.fetch_active_disasters().await }
        },
    );
    let requests = create_resource(
        move || auth.get().user_id(),
        move |user_id| {
            let repo = repository.clone();
            async move {
                match user_id {
                    Some(id) => repo.fetch_my_requests(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    view! {
        <Layout>
            <PageTitle title=greeting() subtitle="Stay informed and get help when you need it." />
            <div class="space-y-8">
                <QuickActions />
                <div class="grid gap-6 lg:grid-cols-2">
                    <section class="bg-surface-elevated shadow rounded-lg p-6">
                        <h3 class="text-lg font-semibold text-fg mb-4">"Active disaster alerts"</h3>
                        <Suspense fallback=move || view! { <LoadingSpinner /> }>
                            {move || alerts.get().map(|result| match result {
                                Ok(list) => view! { <ActiveAlerts disasters=list /> }.into_view(),
                                Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            })}
                        </Suspense>
                    </section>
                    <section class="bg-surface-elevated shadow rounded-lg p-6">
                        <h3 class="text-lg font-semibold text-fg mb-4">"My requests"</h3>
                        <Suspense fallback=move || view! { <LoadingSpinner /> }>
                            {move || requests.get().map(|result| match result {
                                Ok(list) => view! {
                                    <MyRequests requests=newest_requests(list, RECENT_REQUESTS) />
                                }
                                .into_view(),
                                Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                            })}
                        </Suspense>
                        <a href="/submitrequest" class="mt-4 inline-block text-sm font-medium text-link hover:text-link-hover">
                            "Submit a new request"
                        </a>
                    </section>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::UserRole;
    use crate::test_support::ssr::render_as;

    #[test]
    fn home_greets_user_and_shows_quick_actions() {
        let html = render_as(UserRole::User, || view! { <HomePanel /> });
        assert!(html.contains("Welcome back, User Tester"));
        assert!(html.contains("Request Resources"));
        assert!(html.contains("Active disaster alerts"));
    }
}
