use super::view_model::use_reset_password_view_model;
use crate::components::{error::InlineErrorMessage, layout::AuthCard};
use leptos::*;

const FIELD_CLASS: &str = "appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    let form = vm.form;
    let success = vm.success;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    view! {
        <AuthCard title="Set new password">
            <Show when=move || success.get().is_some()>
                <div class="rounded-md bg-status-success-bg p-4 text-status-success-text space-y-2">
                    <p class="text-sm">{move || success.get().unwrap_or_default()}</p>
                    <a href="/login" class="text-sm font-medium underline">"Go to login"</a>
                </div>
            </Show>
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit_action.dispatch(form.get_untracked());
                }
            >
                <input
                    type="text"
                    class=FIELD_CLASS
                    placeholder="Reset token"
                    prop:value=move || form.with(|f| f.token.clone())
                    on:input=move |ev| form.update(|f| f.token = event_target_value(&ev))
                />
                <input
                    type="password"
                    class=FIELD_CLASS
                    placeholder="New password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <input
                    type="password"
                    class=FIELD_CLASS
                    placeholder="Confirm new password"
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                />
                <InlineErrorMessage error=vm.error.into() />
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                >
                    {move || if pending.get() { "Resetting..." } else { "Reset Password" }}
                </button>
            </form>
        </AuthCard>
    }
}
