use super::{
    utils::{can_cancel, newest_first},
    view_model::use_resource_request_view_model,
};
use crate::{
    api::ResourceRequestView,
    components::{
        cards::StatusBadge,
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, PendingConfirmation},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle, SuccessMessage},
    },
    utils::time::format_date,
};
use leptos::*;

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text";

#[component]
pub fn ResourceRequestPanel() -> impl IntoView {
    let vm = use_resource_request_view_model();
    let form = vm.form;
    let resources = vm.resources;
    let my_requests = vm.my_requests;
    let request_action = vm.request_action;
    let cancel_action = vm.cancel_action;
    let pending = request_action.pending();
    let confirm = create_rw_signal(None::<PendingConfirmation>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        request_action.dispatch(form.get_untracked());
    };

    let request_row = move |r: ResourceRequestView| {
        let cancellable = can_cancel(&r);
        let id = r.request_id;
        view! {
            <tr>
                <td class="px-4 py-2 text-sm text-fg">{r.resource_name}</td>
                <td class="px-4 py-2 text-sm text-fg">{r.requested_quantity}</td>
                <td class="px-4 py-2 text-sm text-fg-muted">{r.location}</td>
                <td class="px-4 py-2 text-sm text-fg-muted">{format_date(&r.request_date)}</td>
                <td class="px-4 py-2"><StatusBadge status=r.status /></td>
                <td class="px-4 py-2 text-right">
                    <Show when=move || cancellable>
                        <Button
                            variant=ButtonVariant::Danger
                            on:click=move |_| confirm.set(Some(PendingConfirmation {
                                id,
                                title: "Cancel request".into(),
                                message: "Cancel this resource request? This cannot be undone.".into(),
                            }))
                        >
                            "Cancel"
                        </Button>
                    </Show>
                </td>
            </tr>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Request Resources" subtitle="Ask for supplies from the relief inventory." />
            <div class="space-y-6">
                <form class="bg-surface-elevated shadow rounded-lg p-6 grid gap-4 md:grid-cols-4 items-end" on:submit=on_submit>
                    <label class="block md:col-span-2">
                        <span class="text-sm font-medium text-fg">"Resource"</span>
                        <select
                            class=FIELD_CLASS
                            on:change=move |ev| form.update(|f| f.resource_id = event_target_value(&ev))
                            prop:value=move || form.with(|f| f.resource_id.clone())
                        >
                            <option value="">"Select a resource"</option>
                            {move || resources.get().and_then(|r| r.ok()).unwrap_or_default()
                                .into_iter()
                                .map(|r| view! {
                                    <option value=r.resource_id.to_string() disabled=r.available_quantity <= 0>
                                        {format!("{} ({}) - {} available", r.name, r.resource_type, r.available_quantity)}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="block">
                        <span class="text-sm font-medium text-fg">"Quantity"</span>
                        <input
                            type="number"
                            min="1"
                            class=FIELD_CLASS
                            prop:value=move || form.with(|f| f.quantity.clone())
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm font-medium text-fg">"Delivery location"</span>
                        <input
                            type="text"
                            class=FIELD_CLASS
                            prop:value=move || form.with(|f| f.location.clone())
                            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                        />
                    </label>
                    <div class="md:col-span-4 space-y-2">
                        {move || vm.success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
                        <InlineErrorMessage error=vm.error.into() />
                        <Button loading=pending>"Submit Request"</Button>
                    </div>
                </form>

                <section class="bg-surface-elevated shadow rounded-lg p-6">
                    <h3 class="text-lg font-semibold text-fg mb-4">"My resource requests"</h3>
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || my_requests.get().map(|result| match result {
                            Ok(list) if list.is_empty() => view! {
                                <EmptyState title="No resource requests yet" />
                            }
                            .into_view(),
                            Ok(list) => view! {
                                <div class="overflow-x-auto">
                                    <table class="min-w-full divide-y divide-border">
                                        <thead>
                                            <tr class="text-left text-xs font-medium text-fg-muted uppercase">
                                                <th class="px-4 py-2">"Resource"</th>
                                                <th class="px-4 py-2">"Qty"</th>
                                                <th class="px-4 py-2">"Location"</th>
                                                <th class="px-4 py-2">"Requested"</th>
                                                <th class="px-4 py-2">"Status"</th>
                                                <th class="px-4 py-2"></th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-border">
                                            {newest_first(list).into_iter().map(request_row).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }
                            .into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })}
                    </Suspense>
                </section>
            </div>
            <ConfirmDialog
                pending=confirm
                on_confirm=Callback::new(move |id| cancel_action.dispatch(id))
                confirm_label="Cancel request"
            />
        </Layout>
    }
}
