//! Candidate matching: CV preselection feeds agent summary/rating generation,
//! producing the ranked candidate list the dashboard renders.

pub mod handlers;
pub mod summary;
