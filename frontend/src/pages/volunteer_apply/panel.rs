use super::{
    repository::VolunteerApplyRepository,
    utils::{can_apply, validate_description},
};
use crate::{
    api::{ApiClient, ApiError, VolunteerApplication},
    components::{
        cards::StatusBadge,
        error::InlineErrorMessage,
        forms::TextAreaField,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle, SuccessMessage},
    },
    state::auth::use_auth,
    utils::{time::format_date, validation::MAX_APPLICATION_DESCRIPTION_LEN},
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn VolunteerApplyPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = VolunteerApplyRepository::new_with_client(Rc::new(api));

    let description = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);
    let reload = create_rw_signal(0u32);

    let repo_for_list = repository.clone();
    let applications = create_resource(
        move || (auth.get().user_id(), reload.get()),
        move |(user_id, _)| {
            let repo = repo_for_list.clone();
            async move {
                match user_id {
                    Some(id) => repo.my_applications(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let apply_action = create_action(move |raw: &String| {
        let repo = repository.clone();
        let raw = raw.clone();
        async move {
            let description = validate_description(&raw)?;
            repo.apply(description).await
        }
    });
    let pending = apply_action.pending();

    create_effect(move |_| {
        if let Some(result) = apply_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    description.set(String::new());
                    success.set(Some("Application submitted. We'll notify you once it is reviewed.".into()));
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let history = move |list: Vec<VolunteerApplication>| {
        let open_form = can_apply(&list);
        view! {
            <ul class="divide-y divide-border mb-6">
                {list
                    .into_iter()
                    .map(|a| view! {
                        <li class="py-3 flex items-start justify-between gap-3">
                            <div>
                                <p class="text-sm text-fg">{a.description}</p>
                                <p class="text-xs text-fg-muted">{format!("Applied {}", format_date(&a.application_date))}</p>
                            </div>
                            <StatusBadge status=a.status />
                        </li>
                    })
                    .collect_view()}
            </ul>
            <Show
                when=move || open_form
                fallback=|| view! {
                    <p class="text-sm text-fg-muted">"Your application is pending review or already approved."</p>
                }
            >
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        apply_action.dispatch(description.get_untracked());
                    }
                >
                    <TextAreaField
                        label="Why do you want to volunteer? Mention skills, availability and languages."
                        value=description
                        max_chars=MAX_APPLICATION_DESCRIPTION_LEN
                    />
                    <InlineErrorMessage error=error.into() />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Submitting..." } else { "Apply" }}
                    </button>
                </form>
            </Show>
        }
    };

    view! {
        <Layout>
            <PageTitle title="Become a Volunteer" subtitle="Help your community during emergencies." />
            <div class="max-w-2xl bg-surface-elevated shadow rounded-lg p-6">
                {move || success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || applications.get().map(|result| match result {
                        Ok(list) => history(list).into_view(),
                        Err(err) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    })}
                </Suspense>
            </div>
        </Layout>
    }
}
