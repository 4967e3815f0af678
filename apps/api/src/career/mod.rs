// Career guidance core: static catalog, weighted matching, roadmap templates,
// and the questionnaire that shapes the matcher's input.
// Everything here is pure; persistence lives in the `assessment` module.

pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod questionnaire;
pub mod roadmap;
