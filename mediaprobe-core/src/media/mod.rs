//! Media probing module
//!
//! This module provides the mediainfo backed duration probe.

pub mod probe;

// Re-export commonly used types
pub use probe::{MediaInfoProbe, VIDEO_DURATION_OUTPUT};
