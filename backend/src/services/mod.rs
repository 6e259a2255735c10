//! Lifecycle rules that sit between the HTTP handlers and the repositories.
//!
//! Functions take repository trait objects so the rules can be exercised
//! against mocks without a database.

pub mod auth;
pub mod notification;
pub mod password_reset;
pub mod resource_request;
pub mod task;
pub mod task_request;
pub mod user;
pub mod volunteer_application;
