//! Networking modules for the site's JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every server endpoint the browser calls. Row and session
//! shapes come from the shared `records` crate.

pub mod api;
