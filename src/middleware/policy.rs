//! Route policy: the static table deciding which route prefixes a role may
//! reach, and where each role lands after login or denial.
//!
//! Keeping the rules in one table (instead of per-role branches scattered
//! through the gateway) makes the authorization set declarative and
//! independently testable.

use crate::directory::model::Role;

/// The login boundary. Unauthenticated users are sent here; authenticated
/// users are sent away from here.
pub const LOGIN_PATH: &str = "/";

/// Route prefixes the gateway protects. Everything else passes through.
const PROTECTED_PREFIXES: &[&str] = &["/admin", "/teacher", "/student"];

const ADMIN_PREFIXES: &[&str] = &["/admin", "/teacher", "/student"];
const TEACHER_PREFIXES: &[&str] = &["/teacher"];
const STUDENT_PREFIXES: &[&str] = &["/student"];

/// Whether a path falls under any protected prefix.
pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// The route prefixes a role is allowed to reach.
pub fn allowed_prefixes(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => ADMIN_PREFIXES,
        Role::Teacher => TEACHER_PREFIXES,
        Role::Student => STUDENT_PREFIXES,
    }
}

/// Each role's own landing page, used after login and as the redirect target
/// on denial.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Teacher => "/teacher",
        Role::Student => "/student",
    }
}

/// Whether a role may reach a path.
pub fn allows(role: Role, path: &str) -> bool {
    allowed_prefixes(role)
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_protected() {
        assert!(is_protected("/admin"));
        assert!(is_protected("/admin/students"));
        assert!(is_protected("/teacher/attendance"));
        assert!(is_protected("/student"));
        assert!(!is_protected("/"));
        assert!(!is_protected("/api/auth/login"));
        assert!(!is_protected("/favicon.ico"));
    }

    #[test]
    fn test_admin_reaches_everything() {
        for path in ["/admin", "/teacher", "/student", "/admin/exams"] {
            assert!(allows(Role::Admin, path), "admin denied {path}");
        }
    }

    #[test]
    fn test_teacher_only_reaches_teacher() {
        assert!(allows(Role::Teacher, "/teacher"));
        assert!(allows(Role::Teacher, "/teacher/classes"));
        assert!(!allows(Role::Teacher, "/admin"));
        assert!(!allows(Role::Teacher, "/student"));
    }

    #[test]
    fn test_student_only_reaches_student() {
        assert!(allows(Role::Student, "/student"));
        assert!(allows(Role::Student, "/student/reports"));
        assert!(!allows(Role::Student, "/admin"));
        assert!(!allows(Role::Student, "/teacher"));
    }

    #[test]
    fn test_landing_paths() {
        assert_eq!(landing_path(Role::Admin), "/admin");
        assert_eq!(landing_path(Role::Teacher), "/teacher");
        assert_eq!(landing_path(Role::Student), "/student");
    }

    #[test]
    fn test_landing_path_is_always_allowed_for_its_role() {
        for role in [Role::Admin, Role::Teacher, Role::Student] {
            assert!(allows(role, landing_path(role)));
        }
    }
}
