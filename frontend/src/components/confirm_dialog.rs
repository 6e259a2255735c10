use leptos::ev::KeyboardEvent;
use leptos::*;

/// A destructive action awaiting confirmation, keyed by the record id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub id: i64,
    pub title: String,
    pub message: String,
}

impl PendingConfirmation {
    pub fn delete(id: i64, what: &str) -> Self {
        Self {
            id,
            title: format!("Delete {}", what),
            message: format!(
                "Are you sure you want to delete this {}? This cannot be undone.",
                what
            ),
        }
    }
}

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Modal bound to a pending confirmation; closes itself on cancel and confirm.
#[component]
pub fn ConfirmDialog(
    pending: RwSignal<Option<PendingConfirmation>>,
    on_confirm: Callback<i64>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let confirm_text = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let title = move || pending.get().map(|p| p.title).unwrap_or_default();
    let message = move || pending.get().map(|p| p.message).unwrap_or_default();
    let cancel = move || pending.set(None);
    let confirm = move || {
        if let Some(p) = pending.get_untracked() {
            pending.set(None);
            on_confirm.call(p.id);
        }
    };

    view! {
        <Show when=move || pending.get().is_some()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel();
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{title}</h2>
                    <p class="text-sm text-fg-muted">{message}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| cancel()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| confirm()
                        >
                            {move || confirm_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
