use super::view_model::use_forgot_password_view_model;
use crate::components::{error::InlineErrorMessage, layout::AuthCard};
use leptos::*;

#[component]
pub fn ForgotPasswordPanel(#[prop(optional, into)] initial_email: String) -> impl IntoView {
    let vm = use_forgot_password_view_model(initial_email);
    let email = vm.email;
    let messages = vm.messages;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    view! {
        <AuthCard
            title="Reset your password"
            subtitle="Enter your email address and we'll send you a link to reset your password."
        >
            {move || match vm.link_sent() {
                Some(msg) => view! {
                    <div class="rounded-md bg-status-success-bg p-4 text-status-success-text space-y-2">
                        <p class="text-sm font-medium">{msg}</p>
                        <a href="/login" class="text-sm font-medium underline">"Back to login"</a>
                    </div>
                }
                .into_view(),
                None => view! {
                    <form
                        class="space-y-6"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit_action.dispatch(email.get_untracked());
                        }
                    >
                        <input
                            id="email-address"
                            name="email"
                            type="email"
                            autocomplete="email"
                            class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                            placeholder="Email address"
                            value=email.get_untracked()
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <InlineErrorMessage error=Signal::derive(move || messages.with(|m| m.error.clone())) />
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Sending..." } else { "Send Reset Link" }}
                        </button>
                        <div class="text-sm text-center">
                            <a href="/login" class="font-medium text-link hover:text-link-hover">"Back to login"</a>
                        </div>
                    </form>
                }
                .into_view(),
            }}
        </AuthCard>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_email_form_until_link_is_sent() {
        let html = render_to_string(|| view! { <ForgotPasswordPanel /> });
        assert!(html.contains("Send Reset Link"));
        assert!(html.contains("Back to login"));
    }

    #[test]
    fn prefills_email_carried_from_login() {
        let html = render_to_string(
            || view! { <ForgotPasswordPanel initial_email="asha@example.com" /> },
        );
        assert!(html.contains("value=\"asha@example.com\""));
    }
}
