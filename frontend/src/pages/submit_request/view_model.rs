use super::{repository::SubmitRequestRepository, utils::TaskRequestForm};
use crate::api::{ApiClient, ApiError, TaskRequest};
use crate::state::auth::use_auth;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct SubmitRequestViewModel {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub location: RwSignal<String>,
    pub photo: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub reload: RwSignal<u32>,
    pub my_requests: Resource<(Option<i64>, u32), Result<Vec<TaskRequest>, ApiError>>,
    pub submit_action: Action<TaskRequestForm, Result<TaskRequest, ApiError>>,
}

impl SubmitRequestViewModel {
    pub fn form(&self) -> TaskRequestForm {
        TaskRequestForm {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            location: self.location.get_untracked(),
            photo: self.photo.get_untracked(),
        }
    }
}

pub fn use_submit_request_view_model() -> SubmitRequestViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SubmitRequestRepository::new_with_client(Rc::new(api));

    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let location = create_rw_signal(String::new());
    let photo = create_rw_signal(String::new());
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);
    let reload = create_rw_signal(0u32);

    let repo_for_list = repository.clone();
    let my_requests = create_resource(
        move || (auth.get().user_id(), reload.get()),
        move |(user_id, _)| {
            let repo = repo_for_list.clone();
            async move {
                match user_id {
                    Some(id) => repo.my_requests(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let submit_action = create_action(move |form: &TaskRequestForm| {
        let repo = repository.clone();
        let form = form.clone();
        async move {
            let payload = form.validate()?;
            repo.submit(payload).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(created) => {
                    error.set(None);
                    success.set(Some(format!(
                        "Request \"{}\" submitted. An administrator will review it shortly.",
                        created.request_title
                    )));
                    title.set(String::new());
                    description.set(String::new());
                    location.set(String::new());
                    photo.set(String::new());
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    SubmitRequestViewModel {
        title,
        description,
        location,
        photo,
        error,
        success,
        reload,
        my_requests,
        submit_action,
    }
}
