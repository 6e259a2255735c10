use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth, RequireVolunteer},
    pages::{
        admin_dashboard::AdminDashboardPage, admin_feedback::AdminFeedbackPage,
        admin_notifications::AdminNotificationsPage,
        admin_resource_requests::AdminResourceRequestsPage, admin_resources::AdminResourcesPage,
        admin_task_requests::AdminTaskRequestsPage, admin_updates::AdminUpdatesPage,
        admin_user_management::AdminUserManagementPage,
        admin_volunteer_applications::AdminVolunteerApplicationsPage,
        admin_volunteers::AdminVolunteersPage, contact::ContactPage,
        disaster_updates::DisasterUpdatesPage, emergency_info::EmergencyInfoPage,
        forgot_password::ForgotPasswordPage, home::HomePage, landing::LandingPage,
        login::LoginPage, profile::ProfilePage, register::RegisterPage,
        reset_password::ResetPasswordPage, resource_request::ResourceRequestPage,
        submit_request::SubmitRequestPage, user_notifications::UserNotificationsPage,
        volunteer_apply::VolunteerApplyPage, volunteer_home::VolunteerHomePage,
        volunteer_tasks::VolunteerTasksPage,
    },
    state::auth::AuthProvider,
};

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/landing",
    "/login",
    "/register",
    "/forgotpassword",
    "/resetpassword",
    "/disasterupdates",
    "/contact",
    "/emergencyinfo",
];

pub const SIGNED_IN_ROUTE_PATHS: &[&str] = &[
    "/home",
    "/profile",
    "/usernotifications",
    "/resourcerequest",
    "/submitrequest",
    "/volunteer",
];

pub const VOLUNTEER_ROUTE_PATHS: &[&str] = &[
    "/volunteer/home",
    "/volunteer/tasks",
    "/volunteer/profile",
    "/volunteer/volunteernotification",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin",
    "/admin/feedback",
    "/admin/notifications",
    "/admin/taskrequests",
    "/admin/resourcerequests",
    "/admin/resources",
    "/admin/settings",
    "/admin/updates",
    "/admin/usermanagement",
    "/admin/volunteerapplications",
    "/admin/volunteers",
];

/// Every mounted path, in group order.
pub fn route_paths() -> impl Iterator<Item = &'static str> {
    PUBLIC_ROUTE_PATHS
        .iter()
        .chain(SIGNED_IN_ROUTE_PATHS)
        .chain(VOLUNTEER_ROUTE_PATHS)
        .chain(ADMIN_ROUTE_PATHS)
        .copied()
}

pub fn is_routed(path: &str) -> bool {
    route_paths().any(|routed| routed == path)
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/landing" view=LandingPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/forgotpassword" view=ForgotPasswordPage/>
                    <Route path="/resetpassword" view=ResetPasswordPage/>
                    <Route path="/disasterupdates" view=DisasterUpdatesPage/>
                    <Route path="/contact" view=ContactPage/>
                    <Route path="/emergencyinfo" view=EmergencyInfoPage/>

                    <Route path="/home" view=|| view! { <RequireAuth><HomePage/></RequireAuth> }/>
                    <Route path="/profile" view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }/>
                    <Route
                        path="/usernotifications"
                        view=|| view! { <RequireAuth><UserNotificationsPage/></RequireAuth> }
                    />
                    <Route
                        path="/resourcerequest"
                        view=|| view! { <RequireAuth><ResourceRequestPage/></RequireAuth> }
                    />
                    <Route
                        path="/submitrequest"
                        view=|| view! { <RequireAuth><SubmitRequestPage/></RequireAuth> }
                    />
                    <Route
                        path="/volunteer"
                        view=|| view! { <RequireAuth><VolunteerApplyPage/></RequireAuth> }
                    />

                    <Route
                        path="/volunteer/home"
                        view=|| view! { <RequireVolunteer><VolunteerHomePage/></RequireVolunteer> }
                    />
                    <Route
                        path="/volunteer/tasks"
                        view=|| view! { <RequireVolunteer><VolunteerTasksPage/></RequireVolunteer> }
                    />
                    <Route
                        path="/volunteer/profile"
                        view=|| view! { <RequireVolunteer><ProfilePage/></RequireVolunteer> }
                    />
                    <Route
                        path="/volunteer/volunteernotification"
                        view=|| view! { <RequireVolunteer><UserNotificationsPage/></RequireVolunteer> }
                    />

                    <Route path="/admin" view=|| view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }/>
                    <Route
                        path="/admin/feedback"
                        view=|| view! { <RequireAdmin><AdminFeedbackPage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/notifications"
                        view=|| view! { <RequireAdmin><AdminNotificationsPage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/taskrequests"
                        view=|| view! { <RequireAdmin><AdminTaskRequestsPage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/resourcerequests"
                        view=|| view! { <RequireAdmin><AdminResourceRequestsPage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/resources"
                        view=|| view! { <RequireAdmin><AdminResourcesPage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/settings"
                        view=|| view! { <RequireAdmin><ProfilePage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/updates"
                        view=|| view! { <RequireAdmin><AdminUpdatesPage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/usermanagement"
                        view=|| view! { <RequireAdmin><AdminUserManagementPage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/volunteerapplications"
                        view=|| view! { <RequireAdmin><AdminVolunteerApplicationsPage/></RequireAdmin> }
                    />
                    <Route
                        path="/admin/volunteers"
                        view=|| view! { <RequireAdmin><AdminVolunteersPage/></RequireAdmin> }
                    />

                    <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
