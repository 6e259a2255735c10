use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use rakshak_backend::{
    error::AppError,
    handlers::volunteer_applications,
    models::{
        user::UserRole,
        volunteer_application::{ApplicationPayload, ApplicationStatus},
    },
    repositories::{UserRepository, UserRepositoryTrait},
};
use sqlx::PgPool;

mod support;

fn payload(text: &str) -> ApplicationPayload {
    ApplicationPayload {
        description: text.into(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn accepting_an_application_promotes_the_applicant(pool: PgPool) {
    let state = support::test_state(pool.clone());
    let applicant = support::seed_user(&pool, "helper@example.com", UserRole::User).await;

    let (status, Json(application)) = volunteer_applications::apply(
        State(state.clone()),
        Extension(applicant.clone()),
        Json(payload("Trained lifeguard with a boat")),
    )
    .await
    .expect("apply");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(application.status, ApplicationStatus::Pending);

    let err = volunteer_applications::apply(
        State(state.clone()),
        Extension(applicant.clone()),
        Json(payload("Applying twice")),
    )
    .await
    .expect_err("pending application exists");
    assert!(matches!(err, AppError::Conflict(_)));

    let Json(view) =
        volunteer_applications::get_application(State(state.clone()), Path(application.application_id))
            .await
            .expect("application view");
    assert_eq!(view.email, applicant.email);
    assert_eq!(view.username, applicant.name);

    let Json(accepted) = volunteer_applications::accept_application(
        State(state.clone()),
        Path(application.application_id),
    )
    .await
    .expect("accept");
    assert_eq!(accepted.status, ApplicationStatus::Approved);

    let promoted = UserRepository::new()
        .find_by_id(&pool, applicant.user_id)
        .await
        .expect("load user")
        .expect("user exists");
    assert_eq!(promoted.role, UserRole::Volunteer);

    let err = volunteer_applications::reject_application(State(state), Path(application.application_id))
        .await
        .expect_err("already reviewed");
    assert!(matches!(err, AppError::Conflict(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn rejection_keeps_the_citizen_role(pool: PgPool) {
    let state = support::test_state(pool.clone());
    let applicant = support::seed_user(&pool, "maybe@example.com", UserRole::User).await;

    let (_, Json(application)) = volunteer_applications::apply(
        State(state.clone()),
        Extension(applicant.clone()),
        Json(payload("Weekend availability")),
    )
    .await
    .expect("apply");

    let Json(edited) = volunteer_applications::update_application(
        State(state.clone()),
        Path(application.application_id),
        Json(payload("Weekend availability, can cook for camps")),
    )
    .await
    .expect("edit description");
    assert!(edited.description.ends_with("can cook for camps"));

    let Json(rejected) = volunteer_applications::reject_application(
        State(state.clone()),
        Path(application.application_id),
    )
    .await
    .expect("reject");
    assert_eq!(rejected.status, ApplicationStatus::Rejected);

    let user = UserRepository::new()
        .find_by_id(&pool, applicant.user_id)
        .await
        .expect("load user")
        .expect("user exists");
    assert_eq!(user.role, UserRole::User);

    let Json(history) = volunteer_applications::list_user_applications(
        State(state),
        Extension(applicant.clone()),
        Path(applicant.user_id),
    )
    .await
    .expect("my applications");
    assert_eq!(history.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn volunteers_cannot_apply_again(pool: PgPool) {
    let state = support::test_state(pool.clone());
    let volunteer = support::seed_user(&pool, "already@example.com", UserRole::Volunteer).await;

    let err = volunteer_applications::apply(
        State(state),
        Extension(volunteer),
        Json(payload("Let me in")),
    )
    .await
    .expect_err("already a volunteer");
    assert!(matches!(err, AppError::Conflict(_)));
}
