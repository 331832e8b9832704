//! 平台适配层（终端输出）

pub mod output;

pub use output::{print_error, render_error, render_tokens};
