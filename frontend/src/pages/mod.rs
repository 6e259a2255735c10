pub mod admin_dashboard;
pub mod admin_feedback;
pub mod admin_notifications;
pub mod admin_resource_requests;
pub mod admin_resources;
pub mod admin_task_requests;
pub mod admin_updates;
pub mod admin_user_management;
pub mod admin_volunteer_applications;
pub mod admin_volunteers;
pub mod contact;
pub mod disaster_updates;
pub mod emergency_info;
pub mod forgot_password;
pub mod home;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod resource_request;
pub mod submit_request;
pub mod user_notifications;
pub mod volunteer_apply;
pub mod volunteer_home;
pub mod volunteer_tasks;
