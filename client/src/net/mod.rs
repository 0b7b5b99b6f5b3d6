//! Networking modules for the TaskFlow REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls and defines the seams the session store and
//! dashboard depend on; `types` defines the wire schema.

pub mod api;
pub mod types;
