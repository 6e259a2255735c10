pub mod auth;
pub mod disasters;
pub mod feedback;
pub mod notifications;
pub mod resource_requests;
pub mod task_requests;
pub mod tasks;
pub mod users;
pub mod volunteer_applications;
