use super::{utils::page_title, view_model::use_profile_view_model};
use crate::{
    components::{
        cards::StatusBadge,
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageTitle, SuccessMessage},
    },
    state::auth::use_auth,
    utils::time::format_date,
};
use leptos::*;

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text disabled:opacity-70";

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let vm = use_profile_view_model();
    let form = vm.form;
    let editing = vm.editing;
    let save_action = vm.save_action;
    let pending = save_action.pending();
    let title = page_title(auth.get_untracked().role());

    let input = move |label: &'static str,
                      get: fn(&super::utils::ProfileForm) -> String,
                      set: fn(&mut super::utils::ProfileForm, String)| {
        view! {
            <label class="block">
                <span class="text-sm font-medium text-fg">{label}</span>
                <input
                    type="text"
                    class=FIELD_CLASS
                    disabled=move || !editing.get()
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <Layout>
            <PageTitle title=title subtitle="Your contact details are shared with coordinators handling your requests." />
            <div class="max-w-2xl bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                {move || vm.success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || vm.profile.get().and_then(|r| r.err()).map(|err| view! {
                        <ErrorMessage message=err.error />
                    })}
                </Suspense>
                {move || vm.current.get().map(|user| view! {
                    <div class="flex items-center gap-3 text-sm text-fg-muted">
                        <span>{user.role.as_str()}</span>
                        <StatusBadge status=user.user_status.as_str().to_string() />
                        <span>{format!("Member since {}", format_date(&user.created_at))}</span>
                    </div>
                })}
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        save_action.dispatch(form.get_untracked());
                    }
                >
                    {input("Name", |f| f.name.clone(), |f, v| f.name = v)}
                    {input("Email", |f| f.email.clone(), |f, v| f.email = v)}
                    {input("Phone number", |f| f.phone_number.clone(), |f, v| f.phone_number = v)}
                    {input("Location", |f| f.location.clone(), |f, v| f.location = v)}
                    <InlineErrorMessage error=vm.error.into() />
                    <div class="flex gap-2">
                        <Show
                            when=move || editing.get()
                            fallback=move || view! {
                                <Button
                                    variant=ButtonVariant::Secondary
                                    attr:type="button"
                                    on:click=move |_| {
                                        vm.success.set(None);
                                        editing.set(true);
                                    }
                                >
                                    "Edit Profile"
                                </Button>
                            }
                        >
                            <Button loading=pending>"Save"</Button>
                            <Button
                                variant=ButtonVariant::Secondary
                                attr:type="button"
                                on:click=move |_| {
                                    if let Some(user) = vm.current.get_untracked() {
                                        form.set((&user).into());
                                    }
                                    vm.error.set(None);
                                    editing.set(false);
                                }
                            >
                                "Cancel"
                            </Button>
                        </Show>
                    </div>
                </form>
            </div>
        </Layout>
    }
}
