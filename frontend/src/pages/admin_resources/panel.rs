use super::{
    repository::AdminResourcesRepository,
    utils::{is_low_stock, replenish_amount, sort_by_name, ResourceForm},
};
use crate::{
    api::{ApiClient, Resource},
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, PendingConfirmation},
        empty_state::EmptyState,
        error::MessageBanner,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle},
    },
    state::messages::{track_action, MessageState},
};
use leptos::*;
use std::rc::Rc;

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text";

#[component]
pub fn AdminResourcesPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminResourcesRepository::new_with_client(Rc::new(api));
    let form = create_rw_signal(ResourceForm::default());
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);
    let confirm = create_rw_signal(None::<PendingConfirmation>);

    let repo = repository.clone();
    let resources = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_all().await }
        },
    );

    let repo = repository.clone();
    let create_resource_action = create_action(move |value: &ResourceForm| {
        let repo = repo.clone();
        let value = value.clone();
        async move { repo.create(value.validate()?).await }
    });
    let repo = repository.clone();
    let replenish_action = create_action(move |(id, raw): &(i64, String)| {
        let repo = repo.clone();
        let (id, raw) = (*id, raw.clone());
        async move { repo.replenish(id, replenish_amount(&raw)?).await }
    });
    let delete_action = create_action(move |id: &i64| {
        let repo = repository.clone();
        let id = *id;
        async move { repo.delete(id).await.map(|_| id) }
    });

    track_action(create_resource_action, messages, reload, |r| {
        format!("{} added to inventory.", r.name)
    });
    track_action(replenish_action, messages, reload, |r| {
        format!("{} now has {} available.", r.name, r.available_quantity)
    });
    track_action(delete_action, messages, reload, |_| "Resource deleted.".to_string());

    create_effect(move |_| {
        if let Some(Ok(_)) = create_resource_action.value().get() {
            form.set(ResourceForm::default());
        }
    });

    let on_create = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        create_resource_action.dispatch(form.get_untracked());
    };

    let row = move |r: Resource| {
        let id = r.resource_id;
        let amount = create_rw_signal(String::new());
        let low = is_low_stock(&r);
        view! {
            <tr>
                <td class="px-4 py-2 text-sm text-fg">{r.name}</td>
                <td class="px-4 py-2 text-sm text-fg-muted">{r.resource_type}</td>
                <td class="px-4 py-2 text-sm" class:text-status-error-text=low>{r.available_quantity}</td>
                <td class="px-4 py-2">
                    <form
                        class="flex gap-2"
                        on:submit=move |ev: ev::SubmitEvent| {
                            ev.prevent_default();
                            replenish_action.dispatch((id, amount.get_untracked()));
                            amount.set(String::new());
                        }
                    >
                        <input
                            type="number"
                            min="1"
                            placeholder="Qty"
                            class="w-24 rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-sm"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                        <Button variant=ButtonVariant::Secondary>"Replenish"</Button>
                    </form>
                </td>
                <td class="px-4 py-2 text-right">
                    <Button
                        variant=ButtonVariant::Danger
                        attr:type="button"
                        on:click=move |_| confirm.set(Some(PendingConfirmation::delete(id, "resource")))
                    >
                        "Delete"
                    </Button>
                </td>
            </tr>
        }
    };

    let text_input = move |label: &'static str,
                           kind: &'static str,
                           get: fn(&ResourceForm) -> String,
                           set: fn(&mut ResourceForm, String)| {
        view! {
            <label class="block">
                <span class="text-sm font-medium text-fg">{label}</span>
                <input
                    type=kind
                    class=FIELD_CLASS
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Resources" subtitle="Relief inventory available for allocation." />
            <MessageBanner messages=messages />
            <form class="bg-surface-elevated shadow rounded-lg p-6 grid gap-4 md:grid-cols-4 items-end mb-6" on:submit=on_create>
                {text_input("Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {text_input("Type", "text", |f| f.resource_type.clone(), |f, v| f.resource_type = v)}
                {text_input("Quantity", "number", |f| f.quantity.clone(), |f, v| f.quantity = v)}
                <Button loading=create_resource_action.pending()>"Add resource"</Button>
            </form>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || resources.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! { <EmptyState title="No resources in inventory" /> }.into_view(),
                    Ok(list) => view! {
                        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
                            <table class="min-w-full divide-y divide-border">
                                <thead>
                                    <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                                        <th class="px-4 py-2">"Name"</th>
                                        <th class="px-4 py-2">"Type"</th>
                                        <th class="px-4 py-2">"Available"</th>
                                        <th class="px-4 py-2">"Replenish"</th>
                                        <th class="px-4 py-2"></th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {sort_by_name(list).into_iter().map(row).collect_view()}
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::UserRole;
    use crate::test_support::ssr::render_as;

    #[test]
    fn renders_create_form() {
        let html = render_as(UserRole::Admin, || view! { <AdminResourcesPanel /> });
        assert!(html.contains("Add resource"));
    }
}
