//! Command handlers.
//!
//! There is a single use case — scaffold a project — so there is a single
//! handler module.

pub mod scaffold;
