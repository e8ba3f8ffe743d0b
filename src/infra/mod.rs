pub mod boot;
pub mod config;
pub mod logging;
pub mod mcp;
