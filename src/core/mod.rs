pub mod cache;
pub mod classify;
pub mod filter;
pub mod loader;
pub mod log;
pub mod logic;
pub mod prompt;
pub mod report;
