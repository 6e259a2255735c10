use super::{
    repository::AdminUpdatesRepository,
    utils::{status_query, DisasterForm, MAX_DESCRIPTION_LEN, STATUS_FILTER_ALL},
};
use crate::{
    api::{ApiClient, ApiError, Disaster, DISASTER_STATUSES, DISASTER_TYPES, SEVERITIES},
    components::{
        cards::StatusBadge,
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, PendingConfirmation},
        empty_state::EmptyState,
        error::MessageBanner,
        forms::{plain_options, SelectField, TextAreaField, TextField},
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    pages::disaster_updates::utils::sort_newest_first,
    state::messages::{track_action, MessageState},
    utils::time::format_datetime,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
struct DisasterFormSignals {
    editing: RwSignal<Option<i64>>,
    name: RwSignal<String>,
    description: RwSignal<String>,
    location: RwSignal<String>,
    disaster_type: RwSignal<String>,
    severity: RwSignal<String>,
    status: RwSignal<String>,
    reported_at: RwSignal<String>,
}

impl DisasterFormSignals {
    fn new() -> Self {
        let d = DisasterForm::default();
        Self {
            editing: create_rw_signal(d.editing),
            name: create_rw_signal(d.name),
            description: create_rw_signal(d.description),
            location: create_rw_signal(d.location),
            disaster_type: create_rw_signal(d.disaster_type),
            severity: create_rw_signal(d.severity),
            status: create_rw_signal(d.status),
            reported_at: create_rw_signal(d.reported_at),
        }
    }

    fn snapshot(&self) -> DisasterForm {
        DisasterForm {
            editing: self.editing.get_untracked(),
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            location: self.location.get_untracked(),
            disaster_type: self.disaster_type.get_untracked(),
            severity: self.severity.get_untracked(),
            status: self.status.get_untracked(),
            reported_at: self.reported_at.get_untracked(),
        }
    }

    fn load(&self, form: DisasterForm) {
        self.editing.set(form.editing);
        self.name.set(form.name);
        self.description.set(form.description);
        self.location.set(form.location);
        self.disaster_type.set(form.disaster_type);
        self.severity.set(form.severity);
        self.status.set(form.status);
        self.reported_at.set(form.reported_at);
    }
}

fn status_filter_options() -> Vec<(String, String)> {
    std::iter::once((STATUS_FILTER_ALL.to_string(), "All statuses".to_string()))
        .chain(plain_options(DISASTER_STATUSES))
        .collect()
}

#[component]
pub fn AdminUpdatesPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminUpdatesRepository::new_with_client(Rc::new(api));
    let form = DisasterFormSignals::new();
    let status_filter = create_rw_signal(STATUS_FILTER_ALL.to_string());
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);
    let confirm = create_rw_signal(None::<PendingConfirmation>);

    let repo = repository.clone();
    let disasters = create_resource(
        move || (status_query(&status_filter.get()), reload.get()),
        move |(status, _)| {
            let repo = repo.clone();
            async move {
                let mut list = repo.fetch(status).await?;
                sort_newest_first(&mut list);
                Ok::<_, ApiError>(list)
            }
        },
    );

    let repo = repository.clone();
    let save_action = create_action(move |value: &DisasterForm| {
        let repo = repo.clone();
        let value = value.clone();
        async move {
            let payload = value.validate()?;
            repo.save(value.editing, payload).await
        }
    });
    let delete_action = create_action(move |id: &i64| {
        let repo = repository.clone();
        let id = *id;
        async move { repo.delete(id).await.map(|_| id) }
    });
    track_action(save_action, messages, reload, |d| format!("{} saved.", d.name));
    track_action(delete_action, messages, reload, |_| "Disaster deleted.".to_string());

    create_effect(move |_| {
        if let Some(Ok(_)) = save_action.value().get() {
            form.load(DisasterForm::default());
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        save_action.dispatch(form.snapshot());
    };

    let row = move |d: Disaster| {
        let id = d.disaster_id;
        let prefill = DisasterForm::from(&d);
        view! {
            <tr>
                <td class="px-4 py-2 text-sm">
                    <p class="font-medium text-fg">{d.name}</p>
                    <p class="text-fg-muted">{d.description}</p>
                </td>
                <td class="px-4 py-2 text-sm text-fg-muted">{d.location}</td>
                <td class="px-4 py-2 text-sm text-fg-muted">{format!("{} / {}", d.disaster_type, d.severity)}</td>
                <td class="px-4 py-2 text-sm text-fg-muted">{format_datetime(&d.reported_at)}</td>
                <td class="px-4 py-2"><StatusBadge status=d.status /></td>
                <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                    <Button
                        variant=ButtonVariant::Secondary
                        attr:type="button"
                        on:click=move |_| form.load(prefill.clone())
                    >
                        "Edit"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        attr:type="button"
                        on:click=move |_| confirm.set(Some(PendingConfirmation::delete(id, "disaster")))
                    >
                        "Delete"
                    </Button>
                </td>
            </tr>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Disaster Updates" subtitle="Report new disasters and keep their status current." />
            <MessageBanner messages=messages />
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4 mb-6" on:submit=on_submit>
                <h3 class="text-lg font-semibold text-fg">
                    {move || if form.editing.get().is_some() { "Edit disaster" } else { "Report a disaster" }}
                </h3>
                <div class="grid gap-4 md:grid-cols-2">
                    <TextField label="Name" value=form.name required=true />
                    <TextField label="Location" value=form.location required=true />
                </div>
                <TextAreaField label="Description" value=form.description max_chars=MAX_DESCRIPTION_LEN rows=3 />
                <div class="grid gap-4 md:grid-cols-4">
                    <SelectField label="Type" value=form.disaster_type options=plain_options(DISASTER_TYPES) />
                    <SelectField label="Severity" value=form.severity options=plain_options(SEVERITIES) />
                    <SelectField label="Status" value=form.status options=plain_options(DISASTER_STATUSES) />
                    <TextField label="Reported at" value=form.reported_at input_type="datetime-local" />
                </div>
                <div class="flex gap-2">
                    <Button loading=save_action.pending()>
                        {move || if form.editing.get().is_some() { "Save changes" } else { "Create" }}
                    </Button>
                    <Show when=move || form.editing.get().is_some()>
                        <Button
                            variant=ButtonVariant::Secondary
                            attr:type="button"
                            on:click=move |_| form.load(DisasterForm::default())
                        >
                            "Cancel edit"
                        </Button>
                    </Show>
                </div>
            </form>
            <div class="mb-4 md:w-1/4">
                <SelectField label="Show" value=status_filter options=status_filter_options() />
            </div>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || disasters.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! { <EmptyState title="No disasters recorded" /> }.into_view(),
                    Ok(list) => view! {
                        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                            <table class="min-w-full divide-y divide-border">
                                <thead>
                                    <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                                        <th class="px-4 py-2">"Disaster"</th>
                                        <th class="px-4 py-2">"Location"</th>
                                        <th class="px-4 py-2">"Type / severity"</th>
                                        <th class="px-4 py-2">"Reported"</th>
                                        <th class="px-4 py-2">"Status"</th>
                                        <th class="px-4 py-2"></th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {list.into_iter().map(row).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_view(),
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
            <ConfirmDialog
                pending=confirm
                on_confirm=Callback::new(move |id| delete_action.dispatch(id))
                confirm_label="Delete"
            />
        </Layout>
    }
}
