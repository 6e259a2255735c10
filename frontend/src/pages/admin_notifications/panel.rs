use super::{
    repository::AdminNotificationsRepository,
    utils::{admin_order, NotificationForm, MAX_MESSAGE_LEN},
};
use crate::{
    api::{ApiClient, Notification, NOTIFICATION_TARGETS, NOTIFICATION_TYPES},
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, PendingConfirmation},
        empty_state::EmptyState,
        error::MessageBanner,
        forms::{plain_options, SelectField, TextAreaField, TextField},
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    pages::user_notifications::utils::type_badge_class,
    state::messages::{track_action, MessageState},
    utils::time::format_datetime,
};
use leptos::*;
use std::rc::Rc;

/// One signal per input so the shared form fields can bind to them.
#[derive(Clone, Copy)]
struct FormSignals {
    editing: RwSignal<Option<i64>>,
    title: RwSignal<String>,
    message: RwSignal<String>,
    notification_type: RwSignal<String>,
    target_role: RwSignal<String>,
    scheduled_for: RwSignal<String>,
}

impl FormSignals {
    fn new() -> Self {
        let defaults = NotificationForm::default();
        Self {
            editing: create_rw_signal(defaults.editing),
            title: create_rw_signal(defaults.title),
            message: create_rw_signal(defaults.message),
            notification_type: create_rw_signal(defaults.notification_type),
            target_role: create_rw_signal(defaults.target_role),
            scheduled_for: create_rw_signal(defaults.scheduled_for),
        }
    }

    fn snapshot(&self) -> NotificationForm {
        NotificationForm {
            editing: self.editing.get_untracked(),
            title: self.title.get_untracked(),
            message: self.message.get_untracked(),
            notification_type: self.notification_type.get_untracked(),
            target_role: self.target_role.get_untracked(),
            scheduled_for: self.scheduled_for.get_untracked(),
        }
    }

    fn load(&self, form: NotificationForm) {
        self.editing.set(form.editing);
        self.title.set(form.title);
        self.message.set(form.message);
        self.notification_type.set(form.notification_type);
        self.target_role.set(form.target_role);
        self.scheduled_for.set(form.scheduled_for);
    }
}

#[component]
pub fn AdminNotificationsPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminNotificationsRepository::new_with_client(Rc::new(api));
    let form = FormSignals::new();
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);
    let confirm = create_rw_signal(None::<PendingConfirmation>);

    let repo = repository.clone();
    let notifications = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_all().await }
        },
    );

    let repo = repository.clone();
    let save_action = create_action(move |value: &NotificationForm| {
        let repo = repo.clone();
        let value = value.clone();
        async move {
            let payload = value.validate()?;
            repo.save(value.editing, payload).await
        }
    });
    let deactivate_action = create_action(move |id: &i64| {
        let repo = repository.clone();
        let id = *id;
        async move { repo.deactivate(id).await.map(|_| id) }
    });
    track_action(save_action, messages, reload, |n| format!("Notification \"{}\" saved.", n.title));
    track_action(deactivate_action, messages, reload, |_| "Notification deactivated.".to_string());

    create_effect(move |_| {
        if let Some(Ok(_)) = save_action.value().get() {
            form.load(NotificationForm::default());
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        save_action.dispatch(form.snapshot());
    };

    let item = move |n: Notification| {
        let id = n.id;
        let active = n.active;
        let badge = format!(
            "inline-flex px-2 py-0.5 rounded text-xs font-medium {}",
            type_badge_class(&n.notification_type)
        );
        let prefill = NotificationForm::from(&n);
        view! {
            <li class="py-3 flex items-start justify-between gap-4" class:opacity-60=move || !active>
                <div class="space-y-1">
                    <div class="flex items-center gap-2">
                        <span class=badge>{n.notification_type.clone()}</span>
                        <span class="text-xs text-fg-muted">{format!("to {}", n.target_role)}</span>
                        <Show when=move || !active>
                            <span class="text-xs text-fg-muted">"(inactive)"</span>
                        </Show>
                    </div>
                    <p class="font-medium text-fg">{n.title}</p>
                    <p class="text-sm text-fg-muted">{n.message}</p>
                    <p class="text-xs text-fg-muted">{format!("Scheduled {}", format_datetime(&n.scheduled_for))}</p>
                </div>
                <div class="flex gap-2 shrink-0">
                    <Button
                        variant=ButtonVariant::Secondary
                        attr:type="button"
                        on:click=move |_| form.load(prefill.clone())
                    >
                        "Edit"
                    </Button>
                    <Show when=move || active>
                        <Button
                            variant=ButtonVariant::Danger
                            attr:type="button"
                            on:click=move |_| confirm.set(Some(PendingConfirmation {
                                id,
                                title: "Deactivate notification".into(),
                                message: "Recipients will no longer see this notification.".into(),
                            }))
                        >
                            "Deactivate"
                        </Button>
                    </Show>
                </div>
            </li>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Notifications" subtitle="Broadcast alerts to citizens, volunteers and admins." />
            <MessageBanner messages=messages />
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4 mb-6" on:submit=on_submit>
                <h3 class="text-lg font-semibold text-fg">
                    {move || if form.editing.get().is_some() { "Edit notification" } else { "New notification" }}
                </h3>
                <TextField label="Title" value=form.title required=true />
                <TextAreaField label="Message" value=form.message max_chars=MAX_MESSAGE_LEN rows=4 />
                <div class="grid gap-4 md:grid-cols-3">
                    <SelectField label="Type" value=form.notification_type options=plain_options(NOTIFICATION_TYPES) />
                    <SelectField label="Audience" value=form.target_role options=plain_options(NOTIFICATION_TARGETS) />
                    <TextField label="Scheduled for" value=form.scheduled_for input_type="datetime-local" />
                </div>
                <div class="flex gap-2">
                    <Button loading=save_action.pending()>
                        {move || if form.editing.get().is_some() { "Save changes" } else { "Publish" }}
                    </Button>
                    <Show when=move || form.editing.get().is_some()>
                        <Button
                            variant=ButtonVariant::Secondary
                            attr:type="button"
                            on:click=move |_| form.load(NotificationForm::default())
                        >
                            "Cancel edit"
                        </Button>
                    </Show>
                </div>
            </form>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || notifications.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! { <EmptyState title="No notifications sent yet" /> }.into_view(),
                    Ok(list) => view! {
                        <ul class="bg-surface-elevated shadow rounded-lg px-6 divide-y divide-border">
                            {admin_order(list).into_iter().map(item).collect_view()}
                        </ul>
                    }
                    .into_view(),
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
            <ConfirmDialog
                pending=confirm
                on_confirm=Callback::new(move |id| deactivate_action.dispatch(id))
                confirm_label="Deactivate"
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::UserRole;
    use crate::test_support::ssr::render_as;

    #[test]
    fn renders_new_notification_form() {
        let html = render_as(UserRole::Admin, || view! { <AdminNotificationsPanel /> });
        assert!(html.contains("New notification"));
        assert!(html.contains("Emergency"));
        assert!(html.contains("Publish"));
    }
}
