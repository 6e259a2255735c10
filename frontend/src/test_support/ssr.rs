use crate::api::UserRole;
use crate::test_support::helpers::provide_session;
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders on the host with resource loading suppressed, so panels render
/// their `Suspense` fallbacks instead of calling the API.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Same as [`render_to_string`] with a signed-in session for `role`.
pub fn render_as<F, N>(role: UserRole, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_session(role);
        view()
    })
}
