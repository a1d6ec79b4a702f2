//! Shorthand selector compilation.
//!
//! A shorthand path such as `todo_page main rows row:first` is split into
//! tokens (whitespace inside `()`, `[]` or `{}` does not split), and every
//! bare token is rewritten into an attribute selector:
//! `[data-test='todo_page'] [data-test='main'] [data-test='rows'] [data-test='row']:first`.
//!
//! Compilation is total: any input string yields some output string.

mod compile;
mod tokenize;


pub use compile::{SelectorCompiler, compile, escape_text};
pub use tokenize::tokenize;

/// Attribute used when none is configured.
pub const DEFAULT_ATTRIBUTE: &str = "data-test";
