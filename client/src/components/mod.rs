//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render presentational pieces. They receive data through props
//! and never talk to the network or the session store.

pub mod loading_screen;
pub mod placeholder;
pub mod stats_card;
