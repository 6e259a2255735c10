use super::repository::VolunteerHomeRepository;
use crate::api::{ApiClient, ApiError, Disaster, Task, TaskDetail};
use crate::state::auth::use_auth;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct VolunteerHomeViewModel {
    pub disasters: Resource<(), Result<Vec<Disaster>, ApiError>>,
    pub available: Resource<u32, Result<Vec<TaskDetail>, ApiError>>,
    pub mine: Resource<(Option<i64>, u32), Result<Vec<TaskDetail>, ApiError>>,
    pub accept_action: Action<i64, Result<Task, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
}

pub fn use_volunteer_home_view_model() -> VolunteerHomeViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = VolunteerHomeRepository::new_with_client(Rc::new(api));
    let reload = create_rw_signal(0u32);
    let error = create_rw_signal(None);
    let success = create_rw_signal(None);

    let repo = repository.clone();
    let disasters = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.active_disasters().await }
        },
    );

    let repo = repository.clone();
    let available = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.available_tasks().await }
        },
    );

    let repo = repository.clone();
    let mine = create_resource(
        move || (auth.get().user_id(), reload.get()),
        move |(user_id, _)| {
            let repo = repo.clone();
            async move {
                match user_id {
                    Some(id) => repo.my_tasks(id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let accept_action = create_action(move |task_id: &i64| {
        let repo = repository.clone();
        let task_id = *task_id;
        let volunteer_id = auth.get_untracked().user_id();
        async move {
            let volunteer_id =
                volunteer_id.ok_or_else(|| ApiError::validation("Please sign in again"))?;
            repo.accept(task_id, volunteer_id).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = accept_action.value().get() {
            match result {
                Ok(task) => {
                    error.set(None);
                    success.set(Some(format!("Task #{} accepted.", task.task_id)));
                    reload.update(|v| *v = v.wrapping_add(1));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    VolunteerHomeViewModel {
        disasters,
        available,
        mine,
        accept_action,
        error,
        success,
    }
}
