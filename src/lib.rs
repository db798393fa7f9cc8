//! # promptline
//!
//! `promptline` renders a two-line shell prompt: the time, a colored
//! `[user@host]`, the working directory shortened to fit a character budget,
//! and the current Git branch colored by how dirty the working tree is.
//! It powers the `promptline` CLI tool.
//!
//! ## Example
//!
//! ```rust
//! use promptline::path::PathPrettifier;
//!
//! let pretty = PathPrettifier::new()
//!     .with_home(Some("/home/alice"))
//!     .prettify("/home/alice/projects/app", 60)
//!     .unwrap();
//! assert_eq!(pretty, "~/projects/app");
//! ```

pub mod color;
pub mod commands;
pub mod core;
pub mod git;
pub mod path;
pub mod prompt;
