//! Persistent multi-profile directory with plain CRUD over `profile`.

pub mod handlers;
pub mod schema;
pub mod store;
