use super::view_model::use_submit_request_view_model;
use crate::{
    components::{
        cards::StatusBadge,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        forms::{TextAreaField, TextField},
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle, SuccessMessage},
    },
    utils::{time::format_datetime, validation::MAX_REQUEST_DESCRIPTION_LEN},
};
use leptos::*;

#[component]
pub fn SubmitRequestPanel() -> impl IntoView {
    let vm = use_submit_request_view_model();
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();
    let my_requests = vm.my_requests;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_action.dispatch(vm.form());
    };

    view! {
        <Layout>
            <PageTitle title="Request Help" subtitle="Tell us what you need and where. Volunteers are assigned once approved." />
            <div class="grid gap-6 lg:grid-cols-2">
                <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                    {move || vm.success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
                    <TextField label="Title" value=vm.title placeholder="e.g. Food for 6 people" required=true />
                    <TextAreaField label="Description" value=vm.description max_chars=MAX_REQUEST_DESCRIPTION_LEN />
                    <TextField label="Location" value=vm.location required=true />
                    <TextField label="Photo URL (optional)" value=vm.photo input_type="url" />
                    <InlineErrorMessage error=vm.error.into() />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit Request" }}
                    </button>
                </form>
                <section class="bg-surface-elevated shadow rounded-lg p-6">
                    <h3 class="text-lg font-semibold text-fg mb-4">"My requests"</h3>
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || my_requests.get().map(|result| match result {
                            Ok(list) if list.is_empty() => view! {
                                <EmptyState title="No requests yet" />
                            }
                            .into_view(),
                            Ok(list) => view! {
                                <ul class="divide-y divide-border">
                                    {list
                                        .into_iter()
                                        .map(|r| view! {
                                            <li class="py-3">
                                                <div class="flex items-center justify-between">
                                                    <p class="text-sm font-medium text-fg">{r.request_title}</p>
                                                    <StatusBadge status=r.status />
                                                </div>
                                                <p class="text-xs text-fg-muted">
                                                    {format!("{} · {}", r.location, format_datetime(&r.created_at))}
                                                </p>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })}
                    </Suspense>
                </section>
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
    fn renders_description_counter_with_limit() {
        let html = render_as(UserRole::User, || view! { <SubmitRequestPanel /> });
        assert!(html.contains("0 of 1000"));
        assert!(html.contains("Submit Request"));
    }
}
