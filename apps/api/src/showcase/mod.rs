//! Seeded single-candidate showcase: profile, skills, projects and links.

pub mod handlers;
pub mod links;
pub mod schema;
pub mod store;
