//! Loading and reading line-oriented config files.
//!
//! This module handles:
//! - Tokenizing single lines into blank, comment or `name value` directives
//! - Loading a whole file or stream into a [`Configuration`]
//! - Typed lookups over the loaded values

pub mod line;
pub mod loader;
pub mod typed;
pub mod types;

pub use line::Line;
pub use loader::{load_file, load_reader, load_str};
pub use types::{Configuration, Iter};
