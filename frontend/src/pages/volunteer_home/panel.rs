use super::{
    utils::{ongoing_tasks, open_tasks},
    view_model::use_volunteer_home_view_model,
};
use crate::{
    components::{
        cards::TaskCard,
        common::Button,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle, SuccessMessage},
    },
    pages::home::components::ActiveAlerts,
};
use leptos::*;

#[component]
pub fn VolunteerHomePanel() -> impl IntoView {
    let vm = use_volunteer_home_view_model();
    let accept_action = vm.accept_action;
    let accepting = accept_action.pending();

    view! {
        <Layout>
            <PageTitle title="Volunteer Dashboard" subtitle="Pick up open tasks and track the ones you are working on." />
            {move || vm.success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
            <InlineErrorMessage error=vm.error.into() />
            <div class="grid gap-6 lg:grid-cols-2">
                <section class="space-y-3">
                    <h3 class="text-lg font-semibold text-fg">"Active disasters"</h3>
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || vm.disasters.get().map(|result| match result {
                            Ok(list) => view! { <ActiveAlerts disasters=list /> }.into_view(),
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })}
                    </Suspense>
                </section>
                <section class="space-y-3">
                    <h3 class="text-lg font-semibold text-fg">"My ongoing tasks"</h3>
                    <Suspense fallback=move || view! { <LoadingSpinner /> }>
                        {move || vm.mine.get().map(|result| match result {
                            Ok(list) => {
                                let ongoing = ongoing_tasks(list);
                                if ongoing.is_empty() {
                                    view! { <EmptyState title="Nothing in progress" /> }.into_view()
                                } else {
                                    ongoing
                                        .into_iter()
                                        .map(|task| view! { <TaskCard task=task /> })
                                        .collect_view()
                                }
                            }
                            Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        })}
                    </Suspense>
                    <a href="/volunteer/tasks" class="text-sm text-action-primary-bg hover:underline">"View all my tasks"</a>
                </section>
            </div>
            <section class="mt-8 space-y-3">
                <h3 class="text-lg font-semibold text-fg">"Available tasks"</h3>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || vm.available.get().map(|result| match result {
                        Ok(list) => {
                            let open = open_tasks(list);
                            if open.is_empty() {
                                return view! {
                                    <EmptyState
                                        title="No open tasks"
                                        description="New tasks appear here once requests are approved."
                                    />
                                }
                                .into_view();
                            }
                            view! {
                                <div class="grid gap-4 md:grid-cols-2">
                                    {open
                                        .into_iter()
                                        .map(|task| {
                                            let id = task.task_id;
                                            view! {
                                                <TaskCard task=task>
                                                    <Button
                                                        loading=accepting
                                                        attr:type="button"
                                                        on:click=move |_| accept_action.dispatch(id)
                                                    >
                                                        "Accept task"
                                                    </Button>
                                                </TaskCard>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })}
                </Suspense>
            </section>
        </Layout>
    }
}
