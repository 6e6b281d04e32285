//! Gemini REST client.
//!
//! Provides the `generateContent` wire types, a [`reqwest`]-based client
//! that sends one inline video plus a prompt per call, and the
//! [`backend::AnalysisBackend`] trait the front end calls through.

pub mod api;
pub mod backend;
pub mod config;
pub mod messages;
