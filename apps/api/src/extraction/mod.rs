pub mod document;
pub mod handlers;
pub mod profile;
pub mod vocabulary;
