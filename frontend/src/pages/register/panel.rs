use super::{utils::RegisterForm, view_model::use_register_view_model};
use crate::components::{
    error::InlineErrorMessage,
    layout::{AuthCard, SuccessMessage},
};
use leptos::*;

const FIELD_CLASS: &str = "appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm";

fn field(
    form: RwSignal<RegisterForm>,
    input_type: &'static str,
    placeholder: &'static str,
    get: fn(&RegisterForm) -> String,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
        <input
            type=input_type
            class=FIELD_CLASS
            placeholder=placeholder
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;
    let register_action = vm.register_action;
    let pending = register_action.pending();

    view! {
        <AuthCard title="Create your account" subtitle="Register to request help, resources or to volunteer.">
            {move || vm.registered.get().map(|msg| view! {
                <div>
                    <SuccessMessage message=msg />
                    <a href="/login" class="text-sm font-medium text-link hover:text-link-hover">"Go to login"</a>
                </div>
            })}
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    register_action.dispatch(form.get_untracked());
                }
            >
                {field(form, "text", "Full name", |f| f.name.clone(), |f, v| f.name = v)}
                {field(form, "email", "Email", |f| f.email.clone(), |f, v| f.email = v)}
                {field(form, "password", "Password (min 8 characters)", |f| f.password.clone(), |f, v| f.password = v)}
                {field(form, "password", "Confirm password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                {field(form, "tel", "Phone number", |f| f.phone_number.clone(), |f, v| f.phone_number = v)}
                {field(form, "text", "Location", |f| f.location.clone(), |f, v| f.location = v)}
                <InlineErrorMessage error=vm.error.into() />
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                >
                    {move || if pending.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="text-sm text-center text-fg-muted">
                    "Already registered? "
                    <a href="/login" class="font-medium text-link hover:text-link-hover">"Sign in"</a>
                </p>
            </form>
        </AuthCard>
    }
}
