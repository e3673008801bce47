pub mod analyzer;
pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod scorer;
