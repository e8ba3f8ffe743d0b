pub mod clients;
pub mod core;
pub mod infra;
pub mod prompts;
pub mod resources;
pub mod tools;
