//! linecfg - line-oriented name/value configuration files with typed lookups.
//!
//! A config file holds one directive per line. The name and value are split
//! on the first `=`, `:` or run of whitespace, `#` starts a comment, and
//! blank lines are ignored:
//!
//! ```text
//! retries = 3
//! timeout: 15.5
//! name John Smith   # full name
//! ```
//!
//! Loading is all-or-nothing: a single malformed line fails the whole load.
//! Lookups are strict: a missing name or a value of the wrong type is an
//! error, never a default.
//!
//! # Example
//!
//! ```
//! use linecfg::Configuration;
//!
//! let config: Configuration = "retries = 3\nenabled: true\n".parse()?;
//!
//! assert_eq!(config.get_i32("retries")?, 3);
//! assert!(config.get_bool("enabled")?);
//! assert!(config.get_string("missing").is_err());
//! # Ok::<(), linecfg::ConfigError>(())
//! ```

pub mod config;
pub mod error;

pub use config::Configuration;
pub use error::{ConfigError, MalformedKind, MalformedLineError, Result};
