use super::{repository::ResourceRequestRepository, utils::ResourceRequestForm};
use crate::api::{
    ApiClient, ApiError, Resource as InventoryItem, ResourceRequest, ResourceRequestView,
};
use crate::state::auth::use_auth;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ResourceRequestViewModel {
    pub form: RwSignal<ResourceRequestForm>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub reload: RwSignal<u32>,
    pub resources: Resource<u32, Result<Vec<InventoryItem>, ApiError>>,
    pub my_requests: Resource<(Option<i64>, u32), Result<Vec<ResourceRequestView>, ApiError>>,
    pub request_action: Action<ResourceRequestForm, Result<ResourceRequest, ApiError>>,
    pub cancel_action: Action<i64, Result<ResourceRequest, ApiError>>,
}

pub fn use_resource_request_view_model() -> ResourceRequestViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResourceRequestRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(ResourceRequestForm::default());
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);
    let reload = create_rw_signal(0u32);

    let repo_for_resources = repository.clone();
    let resources = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_resources.clone();
            async move { repo.fetch_resources().await }
        },
    );

    let repo_for_requests = repository.clone();
    let my_requests = create_resource(
        move || (auth.get().user_id(), reload.get()),
        move |(user_id, _)| {
            let repo = repo_for_requests.clone();
            async move {
                match user_id {
                    Some(id) => repo.fetch_my_requests(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let repo_for_request = repository.clone();
    let request_action = create_action(move |value: &ResourceRequestForm| {
        let repo = repo_for_request.clone();
        let value = value.clone();
        let stock = untrack(move || resources.get())
            .and_then(|r| r.ok())
            .unwrap_or_default();
        async move {
            let payload = value.validate(&stock)?;
            repo.request(payload).await
        }
    });

    let cancel_action = create_action(move |request_id: &i64| {
        let repo = repository.clone();
        let request_id = *request_id;
        async move { repo.cancel(request_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(created) => {
                    error.set(None);
                    success.set(Some(format!(
                        "Request #{} submitted for review.",
                        created.request_id
                    )));
                    form.set(ResourceRequestForm::default());
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = cancel_action.value().get() {
            match result {
                Ok(cancelled) => {
                    error.set(None);
                    success.set(Some(format!("Request #{} cancelled.", cancelled.request_id)));
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    ResourceRequestViewModel {
        form,
        error,
        success,
        reload,
        resources,
        my_requests,
        request_action,
        cancel_action,
    }
}
