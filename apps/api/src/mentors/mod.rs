// Mentor directory search and session booking. Mentors themselves are
// seeded outside the API; this module only reads them and books time.

pub mod booking;
pub mod handlers;
pub mod search;
pub mod store;
