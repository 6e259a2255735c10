use super::{
    components::RemarksThread,
    repository::VolunteerTasksRepository,
    utils::{can_complete, group_tasks, RemarkAuthor},
};
use crate::{
    api::{ApiClient, ApiError, TaskDetail},
    components::{
        cards::TaskCard,
        common::{Button, ButtonVariant},
        confirm_dialog::{ConfirmDialog, PendingConfirmation},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle, SuccessMessage},
    },
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn VolunteerTasksPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = VolunteerTasksRepository::new_with_client(Rc::new(api));
    let reload = create_rw_signal(0u32);
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);
    let expanded = create_rw_signal(None::<i64>);
    let confirm = create_rw_signal(None::<PendingConfirmation>);

    let repo = repository.clone();
    let tasks = create_resource(
        move || (auth.get().user_id(), reload.get()),
        move |(user_id, _)| {
            let repo = repo.clone();
            async move {
                match user_id {
                    Some(id) => repo.my_tasks(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let complete_action = create_action(move |task_id: &i64| {
        let repo = repository.clone();
        let task_id = *task_id;
        async move { repo.complete(task_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = complete_action.value().get() {
            match result {
                Ok(task) => {
                    error.set(None);
                    success.set(Some(format!("Task #{} marked complete.", task.task_id)));
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    let task_view = move |task: TaskDetail| {
        let id = task.task_id;
        let completable = can_complete(&task);
        let toggle = move |_| {
            expanded.update(|open| *open = if *open == Some(id) { None } else { Some(id) })
        };
        view! {
            <div class="space-y-2">
                <TaskCard task=task>
                    <Show when=move || completable>
                        <Button
                            attr:type="button"
                            on:click=move |_| confirm.set(Some(PendingConfirmation {
                                id,
                                title: "Complete task".into(),
                                message: "Mark this task as completed?".into(),
                            }))
                        >
                            "Mark complete"
                        </Button>
                    </Show>
                    <Button variant=ButtonVariant::Secondary attr:type="button" on:click=toggle>
                        {move || if expanded.get() == Some(id) { "Hide remarks" } else { "Remarks" }}
                    </Button>
                </TaskCard>
                <Show when=move || expanded.get() == Some(id)>
                    <RemarksThread task_id=id author=RemarkAuthor::Volunteer />
                </Show>
            </div>
        }
    };

    let section = move |title: &'static str, empty: &'static str, list: Vec<TaskDetail>| {
        view! {
            <section class="space-y-3">
                <h3 class="text-lg font-semibold text-fg">{format!("{} ({})", title, list.len())}</h3>
                {if list.is_empty() {
                    view! { <EmptyState title=empty /> }.into_view()
                } else {
                    list.into_iter().map(task_view).collect_view()
                }}
            </section>
        }
    };

    view! {
        <Layout>
            <PageTitle title="My Tasks" subtitle="Update progress and keep a log of what was done." />
            {move || success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
            <InlineErrorMessage error=error.into() />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || tasks.get().map(|result| match result {
                    Ok(list) => {
                        let groups = group_tasks(list);
                        view! {
                            <div class="space-y-8">
                                {section("In progress", "No tasks in progress", groups.in_progress)}
                                {section("Completed", "No completed tasks yet", groups.completed)}
                            </div>
                        }
                        .into_view()
                    }
                    Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                })}
            </Suspense>
            <ConfirmDialog
                pending=confirm
                on_confirm=Callback::new(move |id| complete_action.dispatch(id))
                confirm_label="Mark complete"
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
    fn renders_page_heading() {
        let html = render_as(UserRole::Volunteer, || view! { <VolunteerTasksPanel /> });
        assert!(html.contains("My Tasks"));
    }
}
