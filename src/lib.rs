// Library root; the binary entry point is src/main.rs.

pub mod chat;
pub mod comms;
pub mod config;
pub mod error;
pub mod llm;
pub mod logger;
pub mod roles;
pub mod runtime;
