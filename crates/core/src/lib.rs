//! Domain types and the upload pipeline for clipsight.
//!
//! Validates and encodes user-selected video files, tracks their preview
//! references, and defines the analysis status shared by the front end.

pub mod analysis;
pub mod error;
pub mod file;
pub mod limits;
pub mod media_type;
pub mod payload;
pub mod preview;
pub mod prompt;
pub mod types;
pub mod upload;
