use super::{
    repository::DisasterUpdatesRepository,
    utils::{group_disasters, DisasterGroups},
};
use crate::{
    api::{ApiClient, Disaster},
    components::{
        cards::DisasterCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn DisasterSection(#[prop(into)] title: String, disasters: Vec<Disaster>) -> impl IntoView {
    if disasters.is_empty() {
        return ().into_view();
    }
    view! {
        <section class="space-y-3">
            <h3 class="text-lg font-semibold text-fg">{format!("{} ({})", title, disasters.len())}</h3>
            <div class="grid gap-4 md:grid-cols-2">
                {disasters
                    .into_iter()
                    .map(|disaster| view! { <DisasterCard disaster=disaster /> })
                    .collect_view()}
            </div>
        </section>
    }
    .into_view()
}

pub fn grouped_view(groups: DisasterGroups) -> View {
    if groups.is_empty() {
        return view! {
            <EmptyState title="No disaster updates" description="There are no reported disasters right now." />
        }
        .into_view();
    }
    view! {
        <div class="space-y-8">
            <DisasterSection title="High priority" disasters=groups.high_priority_active />
            <DisasterSection title="Other active" disasters=groups.other_active />
            <DisasterSection title="Resolved" disasters=groups.resolved />
        </div>
    }
    .into_view()
}

#[component]
pub fn DisasterUpdatesPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DisasterUpdatesRepository::new_with_client(Rc::new(api));
    let disasters = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_all().await }
        },
    );

    view! {
        <Layout>
            <PageTitle title="Disaster Updates" subtitle="Latest reported incidents, most recent first." />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || disasters.get().map(|result| match result {
                    Ok(list) => grouped_view(group_disasters(list)),
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
        </Layout>
    }
}
