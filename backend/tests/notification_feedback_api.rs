use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{Duration, Utc};
use rakshak_backend::{
    error::AppError,
    handlers::{feedback, notifications},
    models::{
        feedback::{CreateFeedback, FeedbackStatus, FeedbackStatusPayload},
        notification::{NotificationPayload, NotificationTarget},
        user::UserRole,
    },
};
use sqlx::PgPool;

mod support;

fn notice(title: &str, target: NotificationTarget, minutes_from_now: i64) -> NotificationPayload {
    NotificationPayload {
        title: title.into(),
        message: format!("{} details", title),
        notification_type: "alert".into(),
        target_role: target,
        scheduled_for: Some(Utc::now() + Duration::minutes(minutes_from_now)),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn feed_shows_due_notifications_for_role_and_everyone(pool: PgPool) {
    let state = support::test_state(pool.clone());
    let volunteer = support::seed_user(&pool, "feed@example.com", UserRole::Volunteer).await;

    for payload in [
        notice("Boat teams assemble", NotificationTarget::Volunteer, -10),
        notice("Shelter open", NotificationTarget::All, -5),
        notice("Admin briefing", NotificationTarget::Admin, -5),
        notice("Tomorrow's drill", NotificationTarget::Volunteer, 60),
    ] {
        let (status, _) = notifications::create_notification(State(state.clone()), Json(payload))
            .await
            .expect("create notification");
        assert_eq!(status, StatusCode::CREATED);
    }
    let (_, Json(retracted)) = notifications::create_notification(
        State(state.clone()),
        Json(notice("Retracted", NotificationTarget::All, -1)),
    )
    .await
    .expect("create notification");
    let status = notifications::delete_notification(State(state.clone()), Path(retracted.id))
        .await
        .expect("deactivate");
    assert_eq!(status, StatusCode::NO_CONTENT);

    let Json(feed) = notifications::notifications_for_role(
        State(state.clone()),
        Extension(volunteer.clone()),
        Path("volunteer".into()),
    )
    .await
    .expect("volunteer feed");
    let titles: Vec<&str> = feed.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Shelter open", "Boat teams assemble"]);

    let err = notifications::notifications_for_role(
        State(state.clone()),
        Extension(volunteer),
        Path("Admin".into()),
    )
    .await
    .expect_err("other role's feed");
    assert!(matches!(err, AppError::Forbidden(_)));

    let Json(all) = notifications::list_notifications(State(state))
        .await
        .expect("admin list");
    assert_eq!(all.len(), 5);
    assert!(all.iter().any(|n| !n.active));
}

#[sqlx::test(migrations = "./migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn contact_feedback_is_triaged(pool: PgPool) {
    let state = support::test_state(pool);

    let (status, Json(created)) = feedback::submit_feedback(
        State(state.clone()),
        Json(CreateFeedback {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            subject: "Thanks".into(),
            message: "The shelter list helped my family".into(),
        }),
    )
    .await
    .expect("submit feedback");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.status, FeedbackStatus::Unread);

    let Json(flagged) = feedback::update_feedback_status(
        State(state.clone()),
        Path(created.id),
        Json(FeedbackStatusPayload {
            status: FeedbackStatus::Flagged,
        }),
    )
    .await
    .expect("flag feedback");
    assert_eq!(flagged.status, FeedbackStatus::Flagged);

    let err = feedback::update_feedback_status(
        State(state),
        Path(created.id + 1000),
        Json(FeedbackStatusPayload {
            status: FeedbackStatus::Read,
        }),
    )
    .await
    .expect_err("unknown feedback");
    assert!(matches!(err, AppError::NotFound(_)));
}
