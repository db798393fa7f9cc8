//! Budget-driven path shortening

use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use thiserror::Error;
use tracing::{debug, trace};

use super::compress::compress_with_truncator;
use super::normalize::{absolutize, clean, expand_home, substitute_home};
use super::{DEFAULT_TRUNCATOR, HOME_MARKER};

/// Reserved chars per segment: first, last and the truncator
const MIN_TRUNCATED_SEGMENT_LEN: usize = 3;

/// Errors produced while prettifying a path
#[derive(Debug, Error)]
pub enum PrettifyError {
    /// The path could not be resolved to an absolute form
    #[error("invalid path '{}': {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Shortens paths to a character budget.
///
/// The home directory and working directory are explicit so the result only
/// depends on the prettifier's fields and the arguments to [`prettify`].
///
/// [`prettify`]: PathPrettifier::prettify
#[derive(Clone, Debug)]
pub struct PathPrettifier {
    home: Option<PathBuf>,
    truncator: char,
    working_dir: Option<PathBuf>,
}

impl Default for PathPrettifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PathPrettifier {
    pub fn new() -> Self {
        Self {
            home: None,
            truncator: DEFAULT_TRUNCATOR,
            working_dir: None,
        }
    }

    /// Sets the home directory collapsed to `~`. Empty or relative values are
    /// ignored.
    pub fn with_home(mut self, home: Option<impl AsRef<Path>>) -> Self {
        self.home = home.and_then(|h| {
            let h = h.as_ref();
            if h.is_absolute() {
                Some(clean(h))
            } else {
                if !h.as_os_str().is_empty() {
                    debug!("Ignoring relative home directory {}", h.display());
                }
                None
            }
        });
        self
    }

    pub fn with_truncator(mut self, truncator: char) -> Self {
        self.truncator = truncator;
        self
    }

    /// Resolves relative inputs against `dir` instead of the process working
    /// directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    pub fn truncator(&self) -> char {
        self.truncator
    }

    /// Renders `path` in at most `target_length` chars when achievable.
    ///
    /// A `target_length` of 0 disables truncation.
    pub fn prettify(
        &self,
        path: impl AsRef<Path>,
        target_length: usize,
    ) -> Result<String, PrettifyError> {
        let path = path.as_ref();
        let home = self.home.as_deref();

        let expanded = expand_home(path, home, self.truncator);
        let absolute = absolutize(&expanded, || match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        })
        .map_err(|source| PrettifyError::InvalidPath {
            path: path.to_path_buf(),
            source,
        })?;

        // Kept intact for the whole-path fallback
        let original = substitute_home(&absolute, home);

        let total_length = original.chars().count();
        if target_length == 0 || total_length <= target_length {
            return Ok(original);
        }

        let mut needed_gain = total_length - target_length;
        let mut segments: Vec<String> = original
            .split(MAIN_SEPARATOR)
            .map(str::to_string)
            .collect();

        // The base name and a leading home marker are never truncated
        let end = segments.len().saturating_sub(1);
        let start = if segments.first().is_some_and(|s| s == HOME_MARKER) {
            1.min(end)
        } else {
            0
        };
        let truncatable = &mut segments[start..end];

        needed_gain = truncate_longest_first(truncatable, needed_gain, self.truncator);
        needed_gain = compact_three_char_segments(truncatable, needed_gain, self.truncator);
        needed_gain = collapse_truncated_segments(truncatable, needed_gain, self.truncator);

        if needed_gain > 0 {
            debug!(
                "Segment truncation left {} chars over budget, truncating whole path",
                needed_gain
            );
            return Ok(compress_with_truncator(
                &original,
                self.truncator,
                target_length,
            ));
        }

        Ok(segments.join(&MAIN_SEPARATOR.to_string()))
    }
}

/// Prettifies `path` with the default truncator.
pub fn prettify_path(
    path: impl AsRef<Path>,
    target_length: usize,
    home: Option<&str>,
) -> Result<String, PrettifyError> {
    PathPrettifier::new()
        .with_home(home)
        .prettify(path, target_length)
}

/// Index of the longest segment in chars; the first one wins ties.
fn longest_segment(segments: &[String]) -> Option<usize> {
    let mut longest: Option<(usize, usize)> = None;
    for (i, segment) in segments.iter().enumerate() {
        let len = segment.chars().count();
        if longest.map_or(true, |(_, longest_len)| len > longest_len) {
            longest = Some((i, len));
        }
    }
    longest.map(|(i, _)| i)
}

/// Minimally truncates the longest segments first, at most one visit per
/// segment. Returns the gain still needed.
fn truncate_longest_first(segments: &mut [String], mut needed_gain: usize, truncator: char) -> usize {
    for _ in 0..segments.len() {
        if needed_gain == 0 {
            break;
        }
        let Some(i) = longest_segment(segments) else {
            break;
        };

        let len = segments[i].chars().count();
        let max_gain = len.saturating_sub(MIN_TRUNCATED_SEGMENT_LEN);
        if max_gain == 0 {
            continue;
        }

        let reduction = needed_gain.min(max_gain);
        trace!("Truncating segment {:?} by {}", segments[i], reduction);
        segments[i] = compress_with_truncator(&segments[i], truncator, len - reduction);
        needed_gain -= reduction;
    }
    needed_gain
}

/// Turns three-char segments into their first char plus the truncator.
fn compact_three_char_segments(
    segments: &mut [String],
    mut needed_gain: usize,
    truncator: char,
) -> usize {
    for segment in segments.iter_mut() {
        if needed_gain == 0 {
            break;
        }
        if segment.chars().count() != 3 {
            continue;
        }
        if let Some(first) = segment.chars().next() {
            *segment = format!("{first}{truncator}");
            needed_gain -= 1;
        }
    }
    needed_gain
}

/// Drops the truncator from two-char segments that already carry one.
fn collapse_truncated_segments(
    segments: &mut [String],
    mut needed_gain: usize,
    truncator: char,
) -> usize {
    for segment in segments.iter_mut() {
        if needed_gain == 0 {
            break;
        }
        let mut chars = segment.chars();
        if let (Some(first), Some(last), None) = (chars.next(), chars.next(), chars.next()) {
            if last == truncator {
                *segment = first.to_string();
                needed_gain -= 1;
            }
        }
    }
    needed_gain
}
