pub mod config;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod log;
pub mod refresh;
pub mod report;
pub mod source;
