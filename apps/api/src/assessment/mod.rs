// Persisted assessments and the career matches saved against them.
// All routes here are scoped to the authenticated user.

pub mod handlers;
pub mod history;
pub mod store;
