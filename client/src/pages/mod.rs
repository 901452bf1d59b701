//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, toasts) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod admin_partnerships;
pub mod admin_volunteers;
pub mod dashboard;
pub mod home;
pub mod login;
pub(crate) mod review_panel;
pub mod system_home;
pub mod system_login;
