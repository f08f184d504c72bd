//! Request handlers.

pub mod members;
pub mod root;
