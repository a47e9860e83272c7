//! Command-line interface.

mod args;
pub mod batch;
pub mod classify;
pub mod render;

pub use args::{BatchArgs, ClassifyArgs, Cli, Commands, RenderArgs};
