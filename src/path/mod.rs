//! Path shortening for prompt display
//!
//! The [`PathPrettifier`] squeezes a working directory into a character budget:
//! - the home directory collapses to `~`
//! - parent directories are truncated longest-first, keeping their first and
//!   last characters
//! - three-character and already-truncated directories shrink further
//! - when none of that is enough, the whole path is middle-truncated once

pub(crate) mod compress;
pub(crate) mod normalize;
pub(crate) mod prettify;

/// Marker that replaces the home directory prefix
pub const HOME_MARKER: &str = "~";

/// Character inserted where content was removed
pub const DEFAULT_TRUNCATOR: char = '…';

pub use compress::compress_with_truncator;
pub use prettify::{prettify_path, PathPrettifier, PrettifyError};
