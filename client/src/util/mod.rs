//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from page and state logic so the
//! latter can be tested natively.

pub mod token_storage;
