use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use rakshak_backend::{
    error::AppError,
    handlers::resource_requests,
    models::{
        resource::ReplenishPayload,
        resource_request::{CreateResourceRequest, ResourceRequestStatus},
        user::UserRole,
    },
    repositories::{ResourceRepository, ResourceRepositoryTrait},
};
use sqlx::PgPool;

mod support;

fn request_for(resource_id: i64, quantity: i32) -> CreateResourceRequest {
    CreateResourceRequest {
        resource_id,
        location: "Relief camp 2".into(),
        requested_quantity: quantity,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn allocation_decrements_stock_once(pool: PgPool) {
    let state = support::test_state(pool.clone());
    let citizen = support::seed_user(&pool, "water@example.com", UserRole::User).await;
    let water = support::seed_resource(&pool, "Water cans", 50).await;

    let (status, Json(request)) = resource_requests::request_resource(
        State(state.clone()),
        Extension(citizen.clone()),
        Json(request_for(water.resource_id, 20)),
    )
    .await
    .expect("request resource");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(request.status, ResourceRequestStatus::Pending);

    let Json(allocated) =
        resource_requests::accept_and_allocate(State(state.clone()), Path(request.request_id))
            .await
            .expect("allocate");
    assert_eq!(allocated.status, ResourceRequestStatus::Allocated);

    let stock = ResourceRepository::new()
        .find_by_id(&pool, water.resource_id)
        .await
        .expect("load resource")
        .expect("resource exists");
    assert_eq!(stock.available_quantity, 30);

    let err = resource_requests::accept_and_allocate(State(state), Path(request.request_id))
        .await
        .expect_err("already allocated");
    assert!(matches!(err, AppError::Conflict(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn insufficient_stock_leaves_request_pending(pool: PgPool) {
    let state = support::test_state(pool.clone());
    let citizen = support::seed_user(&pool, "blankets@example.com", UserRole::User).await;
    let blankets = support::seed_resource(&pool, "Blankets", 5).await;

    let (_, Json(request)) = resource_requests::request_resource(
        State(state.clone()),
        Extension(citizen.clone()),
        Json(request_for(blankets.resource_id, 8)),
    )
    .await
    .expect("request resource");

    let err = resource_requests::accept_and_allocate(State(state.clone()), Path(request.request_id))
        .await
        .expect_err("not enough blankets");
    assert!(matches!(err, AppError::BadRequest(_)));

    let Json(views) = resource_requests::list_user_requests(
        State(state.clone()),
        Extension(citizen.clone()),
        Path(citizen.user_id),
    )
    .await
    .expect("list my requests");
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].status, ResourceRequestStatus::Pending);
    assert_eq!(views[0].resource_name, "Blankets");

    let Json(topped_up) = resource_requests::replenish_resource(
        State(state.clone()),
        Path(blankets.resource_id),
        Json(ReplenishPayload { quantity_to_add: 10 }),
    )
    .await
    .expect("replenish");
    assert_eq!(topped_up.available_quantity, 15);

    let Json(allocated) =
        resource_requests::accept_and_allocate(State(state), Path(request.request_id))
            .await
            .expect("allocate after replenish");
    assert_eq!(allocated.status, ResourceRequestStatus::Allocated);
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn only_the_owner_cancels_a_pending_request(pool: PgPool) {
    let state = support::test_state(pool.clone());
    let owner = support::seed_user(&pool, "owner-r@example.com", UserRole::User).await;
    let stranger = support::seed_user(&pool, "stranger@example.com", UserRole::User).await;
    let kits = support::seed_resource(&pool, "Medical kits", 12).await;

    let (_, Json(request)) = resource_requests::request_resource(
        State(state.clone()),
        Extension(owner.clone()),
        Json(request_for(kits.resource_id, 2)),
    )
    .await
    .expect("request resource");

    let err = resource_requests::cancel_request(
        State(state.clone()),
        Extension(stranger),
        Path(request.request_id),
    )
    .await
    .expect_err("stranger cannot cancel");
    assert!(matches!(err, AppError::Forbidden(_)));

    let Json(cancelled) = resource_requests::cancel_request(
        State(state.clone()),
        Extension(owner.clone()),
        Path(request.request_id),
    )
    .await
    .expect("owner cancels");
    assert_eq!(cancelled.status, ResourceRequestStatus::Cancelled);

    let err = resource_requests::cancel_request(State(state), Extension(owner), Path(request.request_id))
        .await
        .expect_err("already cancelled");
    assert!(matches!(err, AppError::Conflict(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn referenced_resource_cannot_be_deleted(pool: PgPool) {
    let state = support::test_state(pool.clone());
    let owner = support::seed_user(&pool, "ref@example.com", UserRole::User).await;
    let food = support::seed_resource(&pool, "Food packets", 100).await;
    let spare = support::seed_resource(&pool, "Tarpaulin", 3).await;

    resource_requests::request_resource(
        State(state.clone()),
        Extension(owner),
        Json(request_for(food.resource_id, 4)),
    )
    .await
    .expect("request resource");

    let err = resource_requests::delete_resource(State(state.clone()), Path(food.resource_id))
        .await
        .expect_err("resource in use");
    assert!(matches!(err, AppError::Conflict(_)));

    let status = resource_requests::delete_resource(State(state), Path(spare.resource_id))
        .await
        .expect("delete unused resource");
    assert_eq!(status, StatusCode::NO_CONTENT);
}
