use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{admin_dashboard, login_page, student_dashboard, teacher_dashboard};

pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(login_page))
        .route("/admin", get(admin_dashboard))
        .route("/teacher", get(teacher_dashboard))
        .route("/student", get(student_dashboard))
}
