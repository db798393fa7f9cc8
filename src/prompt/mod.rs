//! Prompt rendering
//!
//! ```text
//! ┌╼ 1700000000 [alice@box] ~/projects/app main
//! └╼
//! ```

pub(crate) mod environment;
pub(crate) mod render;

pub use environment::Environment;
pub use render::{format_time, prettifier_for, pretty_cwd, render_prompt, user_and_host};
