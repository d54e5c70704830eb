pub mod build;
pub mod config;
pub mod init;
pub mod preview;
pub mod serve;
