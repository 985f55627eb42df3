//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Submission logic that does not
//! need a browser lives in `access_flow`.

pub mod access_flow;
pub mod login;
