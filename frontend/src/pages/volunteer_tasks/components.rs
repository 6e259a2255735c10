use super::{
    repository::RemarksRepository,
    utils::{remark_lines, RemarkAuthor},
};
use crate::{
    api::{ApiClient, ApiError},
    components::{
        common::Button,
        error::InlineErrorMessage,
        forms::TextAreaField,
        layout::LoadingSpinner,
    },
    utils::validation::{self, MAX_REMARKS_LEN},
};
use leptos::*;
use std::rc::Rc;

#[component]
fn RemarkLog(#[prop(into)] title: String, entries: Vec<String>) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-sm font-semibold text-fg">{title}</h4>
            {if entries.is_empty() {
                view! { <p class="text-sm text-fg-muted">"No remarks yet."</p> }.into_view()
            } else {
                view! {
                    <ul class="mt-1 space-y-1">
                        {entries
                            .into_iter()
                            .map(|line| view! { <li class="text-sm text-fg">{line}</li> })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </div>
    }
}

/// Remark history for a task plus a form that appends to `author`'s log.
#[component]
pub fn RemarksThread(task_id: i64, author: RemarkAuthor) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = RemarksRepository::new_with_client(Rc::new(api));
    let draft = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let reload = create_rw_signal(0u32);

    let repo = repository.clone();
    let history = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.history(task_id).await }
        },
    );

    let add_action = create_action(move |raw: &String| {
        let repo = repository.clone();
        let raw = raw.clone();
        async move {
            let text = validation::remarks(&raw)?;
            repo.add(task_id, author, text).await
        }
    });
    let saving = add_action.pending();

    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    draft.set(String::new());
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        add_action.dispatch(draft.get_untracked());
    };

    view! {
        <div class="border-t border-border pt-3 space-y-3">
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || history.get().map(|result| match result {
                    Ok(log) => view! {
                        <div class="grid gap-3 md:grid-cols-2">
                            <RemarkLog
                                title="Volunteer remarks"
                                entries=remark_lines(log.volunteer_remarks.as_deref())
                            />
                            <RemarkLog
                                title="Admin remarks"
                                entries=remark_lines(log.admin_remarks.as_deref())
                            />
                        </div>
                    }
                    .into_view(),
                    Err(err) => view! { <p class="text-sm text-status-error-text">{err.error}</p> }.into_view(),
                })}
            </Suspense>
            <form class="space-y-2" on:submit=on_submit>
                <TextAreaField label="Add a remark" value=draft max_chars=MAX_REMARKS_LEN rows=3 />
                <InlineErrorMessage error=error.into() />
                <Button loading=saving>"Save remark"</Button>
            </form>
        </div>
    }
}
