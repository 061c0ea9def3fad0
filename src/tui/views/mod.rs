pub mod chat;
pub mod clauses;
pub mod documents;
pub mod upload;
