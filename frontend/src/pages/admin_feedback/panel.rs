use super::{
    repository::AdminFeedbackRepository,
    utils::{filter_feedback, next_statuses, status_filter_options, STATUS_FILTER_ALL},
};
use crate::{
    api::{ApiClient, Feedback},
    components::{
        cards::StatusBadge,
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        error::MessageBanner,
        forms::SelectField,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    state::messages::{track_action, MessageState},
    utils::time::format_datetime,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn AdminFeedbackPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminFeedbackRepository::new_with_client(Rc::new(api));
    let status_filter = create_rw_signal(STATUS_FILTER_ALL.to_string());
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);

    let repo = repository.clone();
    let feedback = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_all().await }
        },
    );

    let status_action = create_action(move |(id, status): &(i64, &'static str)| {
        let repo = repository.clone();
        let (id, status) = (*id, *status);
        async move { repo.set_status(id, status).await }
    });
    track_action(status_action, messages, reload, |f| {
        format!("Feedback from {} marked {}.", f.name, f.status)
    });

    let item = move |f: Feedback| {
        let id = f.id;
        let actions = next_statuses(&f);
        view! {
            <li class="py-4 space-y-1">
                <div class="flex items-center justify-between gap-2">
                    <p class="font-medium text-fg">
                        {if f.subject.is_empty() { "(no subject)".to_string() } else { f.subject.clone() }}
                    </p>
                    <StatusBadge status=f.status.clone() />
                </div>
                <p class="text-sm text-fg whitespace-pre-line">{f.message}</p>
                <p class="text-xs text-fg-muted">
                    {format!("{} <{}> · {}", f.name, f.email, format_datetime(&f.created_at))}
                </p>
                <div class="flex gap-2 pt-1">
                    {actions
                        .into_iter()
                        .map(|status| view! {
                            <Button
                                variant=ButtonVariant::Secondary
                                attr:type="button"
                                on:click=move |_| status_action.dispatch((id, status))
                            >
                                {format!("Mark {}", status)}
                            </Button>
                        })
                        .collect_view()}
                </div>
            </li>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Feedback" subtitle="Messages sent through the contact form." />
            <MessageBanner messages=messages />
            <div class="mb-4 md:w-1/4">
                <SelectField label="Status" value=status_filter options=status_filter_options() />
            </div>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || feedback.get().map(|result| match result {
                    Ok(list) => {
                        let visible = filter_feedback(list, &status_filter.get());
                        if visible.is_empty() {
                            return view! { <EmptyState title="No feedback to show" /> }.into_view();
                        }
                        view! {
                            <ul class="bg-surface-elevated shadow rounded-lg px-6 divide-y divide-border">
                                {visible.into_iter().map(item).collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
        </Layout>
    }
}
