//! I/O module
//!
//! Handles payload formatting for everything the server sends back.
//!
//! # Components
//!
//! - `json_format` - JSON bodies, error bodies, and resource listing text

pub mod json_format;

pub use json_format::{error_text, to_json_text, JSON_MIME_TYPE};
