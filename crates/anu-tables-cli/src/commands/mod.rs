//! CLI command implementations.

pub mod build;
pub mod common;
pub mod init;
pub mod show;
