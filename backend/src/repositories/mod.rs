pub mod common;
pub mod disaster;
pub mod feedback;
pub mod notification;
pub mod password_reset;
pub mod resource;
pub mod resource_request;
pub mod task;
pub mod task_request;
pub mod transaction;
pub mod user;
pub mod volunteer_application;

pub use disaster::{DisasterFilter, DisasterRepository, DisasterRepositoryTrait};
pub use feedback::{FeedbackRepository, FeedbackRepositoryTrait};
pub use notification::{NotificationRepository, NotificationRepositoryTrait};
pub use resource::{ResourceRepository, ResourceRepositoryTrait};
pub use resource_request::{ResourceRequestRepository, ResourceRequestRepositoryTrait};
pub use task::{RemarkLog, TaskRepository, TaskRepositoryTrait};
pub use task_request::{TaskRequestRepository, TaskRequestRepositoryTrait};
pub use transaction::*;
pub use user::{NewUser, UserRepository, UserRepositoryTrait};
pub use volunteer_application::{
    VolunteerApplicationRepository, VolunteerApplicationRepositoryTrait,
};
