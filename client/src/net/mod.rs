//! Networking modules for the authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` is the HTTP seam with its
//! browser implementation, `api` maps service routes onto typed calls, and
//! `error` is the shared failure taxonomy.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
