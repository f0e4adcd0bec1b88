//! Core library for determining video durations with mediainfo.
//!
//! This crate runs the external `mediainfo` executable for a media file,
//! captures the single line it prints for the video stream's `%Duration%`
//! field and returns it as a [`std::time::Duration`]. Any failure along the
//! way (missing executable, non-zero exit, unreadable or non-numeric output)
//! yields `None`.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediaprobe_core::{MediaInfoProbe, ProbeConfig};
//! use std::path::Path;
//! use std::time::Duration;
//!
//! let config = ProbeConfig::new(Some("/usr/local/bin/mediainfo".to_string()))
//!     .with_timeout(Duration::from_secs(30));
//! let probe = MediaInfoProbe::new(config);
//!
//! if let Some(duration) = probe.determine_video_duration(Path::new("movie.mkv")) {
//!     println!("{}", mediaprobe_core::format_duration(duration));
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod media;
pub mod utils;

// Re-exports for public API
pub use config::ProbeConfig;
pub use error::{CoreError, CoreResult};
pub use external::{ProbeCommand, ProbeProcess, ProcessSpawner, SystemSpawner};
pub use media::MediaInfoProbe;
pub use utils::{format_duration, parse_duration_millis};
