#![allow(dead_code)]

use std::sync::Arc;

use rakshak_backend::{
    config::{Config, SmtpConfig},
    models::{
        resource::{CreateResource, Resource},
        task::Task,
        task_request::{CreateTaskRequest, TaskRequest},
        user::{User, UserRole},
    },
    repositories::{
        NewUser, ResourceRepository, ResourceRepositoryTrait, TaskRequestRepository,
        TaskRequestRepositoryTrait, UserRepository, UserRepositoryTrait,
    },
    state::AppState,
    utils::{email::EmailService, password::hash_password},
};
use sqlx::PgPool;

pub const TEST_PASSWORD: &str = "relief-camp-2024";

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        jwt_secret: "integration-test-secret".into(),
        jwt_expiration_hours: 1,
        bind_addr: "127.0.0.1:0".into(),
        cors_allow_origins: vec!["*".into()],
        time_zone: chrono_tz::Asia::Kolkata,
        password_reset_ttl_minutes: 15,
        task_deadline_days: 7,
        frontend_url: "http://localhost:8000".into(),
        smtp: SmtpConfig {
            host: "localhost".into(),
            port: 2525,
            username: String::new(),
            password: String::new(),
            from_address: "noreply@rakshak.local".into(),
            skip_send: true,
        },
    }
}

pub fn test_state(pool: PgPool) -> AppState {
    let config = test_config();
    let mailer = EmailService::new(&config.smtp).expect("build mailer");
    AppState::new(pool, config, Arc::new(mailer))
}

pub async fn seed_user(pool: &PgPool, email: &str, role: UserRole) -> User {
    let new_user = NewUser {
        name: format!("{} account", role),
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hash password"),
        phone_number: "9800000000".into(),
        location: "Guwahati".into(),
        role,
    };
    UserRepository::new()
        .create(pool, &new_user)
        .await
        .expect("seed user")
}

pub async fn seed_task_request(pool: &PgPool, owner: &User) -> TaskRequest {
    let payload = CreateTaskRequest {
        request_title: "Rescue boat needed".into(),
        request_description: "Family of four stranded on a rooftop".into(),
        location: "Ward 12".into(),
        photo: None,
    };
    TaskRequestRepository::new()
        .create(pool, owner.user_id, &payload)
        .await
        .expect("seed task request")
}

pub async fn seed_task(pool: &PgPool, owner: &User) -> Task {
    let request = seed_task_request(pool, owner).await;
    TaskRequestRepository::new()
        .approve(pool, request.request_id, chrono::Utc::now() + chrono::Duration::days(7))
        .await
        .expect("approve task request")
        .expect("request was pending")
}

pub async fn seed_resource(pool: &PgPool, name: &str, quantity: i32) -> Resource {
    let payload = CreateResource {
        name: name.into(),
        resource_type: "Relief".into(),
        available_quantity: quantity,
    };
    ResourceRepository::new()
        .create(pool, &payload)
        .await
        .expect("seed resource")
}
