//! Client-side state for the access screen.
//!
//! DESIGN
//! ======
//! `forms` holds the live input values, `access` holds what the screen shows.
//! Both are plain data with pure transitions so they can be tested without a
//! browser.

pub mod access;
pub mod forms;
