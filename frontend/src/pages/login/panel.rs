use super::view_model::use_login_view_model;
use crate::{components::error::InlineErrorMessage, pages::forgot_password::forgot_password_href};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let error = vm.error;
    let login_action = vm.login_action;
    let pending = login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        login_action.dispatch(form.to_request());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in to Rakshak"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Disaster response coordination for citizens, volunteers and responders"
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="email"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text rounded-t-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:z-10 sm:text-sm"
                                placeholder="Email"
                                prop:value=move || form.email.get()
                                on:input=move |ev| form.email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text rounded-b-md focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=move || form.password.get()
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error.into() />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>

                    <div class="flex items-center justify-between text-sm">
                        <a
                            href=move || forgot_password_href(&form.email.get())
                            class="font-medium text-link hover:text-link-hover"
                        >
                            "Forgot your password?"
                        </a>
                        <a href="/register" class="font-medium text-link hover:text-link-hover">
                            "Create an account"
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_fields_and_links() {
        let html = render_to_string(move || view! { <LoginPanel /> });
        assert!(html.contains("Sign in to Rakshak"));
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("/forgotpassword"));
        assert!(html.contains("/register"));
    }
}
