mod auth;
pub mod client;
mod disasters;
mod feedback;
mod notifications;
mod resources;
mod task_requests;
mod tasks;
pub mod types;
mod users;
mod volunteer_applications;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
