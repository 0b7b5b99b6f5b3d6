//! Client application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns authentication, `dashboard` owns summary data, and `view`
//! maps both onto screens. `cell` abstracts the reactive storage they live in.

pub mod cell;
pub mod dashboard;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
