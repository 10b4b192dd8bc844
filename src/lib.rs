pub mod arxiv;
pub mod card;
pub mod config;
pub mod crossref;
pub mod error;
pub mod model;
pub mod report;
pub mod store;
