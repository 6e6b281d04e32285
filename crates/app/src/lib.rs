//! `clipsight` front-end library crate.
//!
//! Re-exports the coordinator, session loop and supporting modules for
//! integration testing. The binary entrypoint lives in `main.rs`.

pub mod commands;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod render;
pub mod session;
