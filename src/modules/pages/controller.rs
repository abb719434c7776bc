//! Portal entry pages.
//!
//! The dashboards themselves (students, classes, attendance, reports) belong
//! to the portal frontend and are out of scope here. These handlers exist as
//! the destinations the gateway routes to: the login page at `/` and one
//! landing page per role.

use axum::response::Html;

pub async fn login_page() -> Html<&'static str> {
    Html("<h1>School Portal</h1><p>Please log in.</p>")
}

pub async fn admin_dashboard() -> Html<&'static str> {
    Html("<h1>Admin Dashboard</h1>")
}

pub async fn teacher_dashboard() -> Html<&'static str> {
    Html("<h1>Teacher Dashboard</h1>")
}

pub async fn student_dashboard() -> Html<&'static str> {
    Html("<h1>Student Dashboard</h1>")
}
