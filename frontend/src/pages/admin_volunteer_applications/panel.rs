use super::{repository::AdminApplicationsRepository, utils::filter_and_split};
use crate::{
    api::{ApiClient, VolunteerApplicationView},
    components::{
        cards::StatusBadge,
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::MessageBanner,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    state::messages::{track_action, MessageState},
    utils::time::format_date,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn AdminVolunteerApplicationsPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminApplicationsRepository::new_with_client(Rc::new(api));
    let search = create_rw_signal(String::new());
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);

    let repo = repository.clone();
    let applications = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_all().await }
        },
    );

    let repo = repository.clone();
    let accept_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.accept(id).await }
    });
    let reject_action = create_action(move |id: &i64| {
        let repo = repository.clone();
        let id = *id;
        async move { repo.reject(id).await }
    });
    track_action(accept_action, messages, reload, |a| {
        format!("Application #{} approved. The applicant is now a volunteer.", a.application_id)
    });
    track_action(reject_action, messages, reload, |a| {
        format!("Application #{} rejected.", a.application_id)
    });

    let card = move |a: VolunteerApplicationView, reviewable: bool| {
        let id = a.application_id;
        view! {
            <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
                <div class="flex items-center justify-between gap-2">
                    <div>
                        <p class="font-semibold text-fg">{a.username}</p>
                        <p class="text-xs text-fg-muted">
                            {format!("{} · {} · {}", a.email, a.phone_number, a.location)}
                        </p>
                    </div>
                    <StatusBadge status=a.status />
                </div>
                <p class="text-sm text-fg">{a.description}</p>
                <p class="text-xs text-fg-muted">{format!("Applied {}", format_date(&a.application_date))}</p>
                <Show when=move || reviewable>
                    <div class="flex gap-2">
                        <Button attr:type="button" on:click=move |_| accept_action.dispatch(id)>"Accept"</Button>
                        <Button
                            variant=ButtonVariant::Danger
                            attr:type="button"
                            on:click=move |_| reject_action.dispatch(id)
                        >
                            "Reject"
                        </Button>
                    </div>
                </Show>
            </div>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Volunteer Applications" />
            <MessageBanner messages=messages />
            <input
                type="search"
                placeholder="Search by name, email, location or description"
                class="mb-6 block w-full md:w-1/2 rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || applications.get().map(|result| match result {
                    Ok(list) => {
                        let groups = search.with(|s| filter_and_split(list, s));
                        view! {
                            <div class="space-y-8">
                                <section class="space-y-3">
                                    <h3 class="text-lg font-semibold text-fg">{format!("Pending ({})", groups.pending.len())}</h3>
                                    {if groups.pending.is_empty() {
                                        view! { <EmptyState title="No pending applications" /> }.into_view()
                                    } else {
                                        groups.pending.into_iter().map(|a| card(a, true)).collect_view()
                                    }}
                                </section>
                                <section class="space-y-3">
                                    <h3 class="text-lg font-semibold text-fg">"Reviewed"</h3>
                                    {if groups.others.is_empty() {
                                        view! { <EmptyState title="No reviewed applications" /> }.into_view()
                                    } else {
                                        groups.others.into_iter().map(|a| card(a, false)).collect_view()
                                    }}
                                </section>
                            </div>
                        }
                        .into_view()
                    }
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
        </Layout>
    }
}
