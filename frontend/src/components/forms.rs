use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">{label}</span>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                value=value.get_untracked()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Counter text under a bounded text area, e.g. `5 of 500`.
pub fn counter_label(count: usize, max_chars: usize) -> String {
    format!("{} of {}", count, max_chars)
}

/// Text area with a live character counter against `max_chars`.
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    max_chars: usize,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let count = move || value.with(|v| crate::utils::text::char_count(v));
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">{label}</span>
            <textarea
                class=INPUT_CLASS
                rows=rows.unwrap_or(4)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <span class=move || {
                if count() > max_chars { "text-xs text-status-error-text" } else { "text-xs text-fg-muted" }
            }>
                {move || counter_label(count(), max_chars)}
            </span>
        </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium text-fg">{label}</span>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let selected_val = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == selected_val>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Builds `(value, label)` pairs where the label is the value itself.
pub fn plain_options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.replace('_', " ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_options_humanize_labels() {
        let options = plain_options(&["IN_PROGRESS", "COMPLETED"]);
        assert_eq!(options[0], ("IN_PROGRESS".to_string(), "IN PROGRESS".to_string()));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn counter_label_avoids_characters_the_renderer_escapes() {
        let label = counter_label(12, 1000);
        assert_eq!(label, "12 of 1000");
        assert!(!label.contains('/'));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_area_shows_counter() {
        let html = render_to_string(move || {
            let value = create_rw_signal("hello".to_string());
            view! { <TextAreaField label="Description" value=value max_chars=500 /> }
        });
        assert!(html.contains(&counter_label(5, 500)));
    }

    #[test]
    fn select_field_renders_options() {
        let html = render_to_string(move || {
            let value = create_rw_signal("LOW".to_string());
            view! {
                <SelectField label="Severity" value=value options=plain_options(&["LOW", "HIGH"]) />
            }
        });
        assert!(html.contains("HIGH"));
        assert!(html.contains("Severity"));
    }
}
