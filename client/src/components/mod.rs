//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and small shared widgets while reading
//! shared state from Leptos context providers.

pub mod application_detail;
pub mod site_header;
pub mod status_badge;
pub mod toast_host;
