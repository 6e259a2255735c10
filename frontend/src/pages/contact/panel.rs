use super::{repository::ContactRepository, utils::ContactForm};
use crate::{
    api::{ApiClient, ApiError, Feedback},
    components::{
        error::InlineErrorMessage,
        forms::{TextAreaField, TextField},
        layout::{Layout, PageTitle, SuccessMessage},
    },
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

const MAX_MESSAGE_LEN: usize = 4000;

#[component]
pub fn ContactPanel() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ContactRepository::new_with_client(Rc::new(api));

    let initial = auth.with_untracked(|state| ContactForm::for_session(state.session.as_ref()));
    let name = create_rw_signal(initial.name);
    let email = create_rw_signal(initial.email);
    let subject = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let sent = create_rw_signal(false);

    let send_action = create_action(move |form: &ContactForm| {
        let repo = repository.clone();
        let form = form.clone();
        async move {
            let payload = form.validate()?;
            repo.send(payload).await
        }
    });
    let pending = send_action.pending();

    create_effect(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(Feedback { id, .. }) => {
                    log::debug!("feedback {} submitted", id);
                    error.set(None);
                    subject.set(String::new());
                    message.set(String::new());
                    sent.set(true);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        sent.set(false);
        send_action.dispatch(ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        });
    };

    view! {
        <Layout>
            <PageTitle title="Contact Us" subtitle="Questions, suggestions or feedback about the relief effort." />
            <div class="max-w-2xl bg-surface-elevated shadow rounded-lg p-6">
                <Show when=move || sent.get()>
                    <SuccessMessage message="Thank you! Your message has been sent." />
                </Show>
                <form class="space-y-4" on:submit=on_submit>
                    <TextField label="Name" value=name required=true />
                    <TextField label="Email" value=email input_type="email" required=true />
                    <TextField label="Subject" value=subject />
                    <TextAreaField label="Message" value=message max_chars=MAX_MESSAGE_LEN rows=6 />
                    <InlineErrorMessage error=error.into() />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
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
    fn contact_form_prefills_signed_in_email() {
        let html = render_as(UserRole::Volunteer, || view! { <ContactPanel /> });
        assert!(html.contains("Send Message"));
        assert!(html.contains("0 of 4000"));
        assert!(html.contains("value=\"volunteer@example.com\""));
    }
}
