//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `gate`, `review`, `toast`) so pages
//! and components depend on small focused models. Each model is a plain
//! struct with pure transitions; pages own the `RwSignal` and the effects.

pub mod gate;
pub mod review;
pub mod session;
pub mod toast;
