//! CLI commands.

pub mod build;
pub mod check;
pub mod index;
pub mod init;
pub mod render;
pub mod watch;
