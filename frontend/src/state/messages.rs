//! Success and error banners shared by the management screens.

use crate::api::ApiError;
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, error: ApiError) {
        self.error = Some(error);
        self.success = None;
    }
}

/// Reports each completed dispatch of `action` into `messages`, and bumps
/// `reload` when it succeeded so dependent resources refetch.
pub fn track_action<I, T>(
    action: Action<I, Result<T, ApiError>>,
    messages: RwSignal<MessageState>,
    reload: RwSignal<u32>,
    describe: impl Fn(&T) -> String + 'static,
) where
    I: 'static,
    T: Clone + 'static,
{
    create_effect(move |_| {
        if let Some(result) = action.value().get() {
            match result {
                Ok(value) => {
                    messages.update(|m| m.set_success(describe(&value)));
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => messages.update(|m| m.set_error(err)),
            }
        }
    });
}
