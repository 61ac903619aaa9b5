use std::path::PathBuf;

/// Why a single line failed to tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
	/// Only one token, no separator.
	MissingSeparator,
	/// The line starts with a separator.
	MissingName,
	/// A separator is present but nothing (or only a comment) follows it.
	MissingValue,
	/// An explicit `=`/`:` separator is followed by another one.
	ExtraSeparator,
	/// The name is followed by a character that is not a separator.
	InvalidName,
}

impl MalformedKind {
	/// Short description used in error messages.
	pub fn as_str(&self) -> &'static str {
		match self {
			MalformedKind::MissingSeparator => "missing separator",
			MalformedKind::MissingName => "missing name",
			MalformedKind::MissingValue => "missing value",
			MalformedKind::ExtraSeparator => "more than one separator",
			MalformedKind::InvalidName => "invalid name",
		}
	}
}

/// A line that violates the `name <separator> value` grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Line is malformed ({}): '{line}'", .kind.as_str())]
pub struct MalformedLineError {
	/// The offending line, as read.
	pub line: String,
	/// Which part of the grammar the line broke.
	pub kind: MalformedKind,
}

/// Library-level structured errors for linecfg.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Config source does not exist: {path}")]
	SourceNotFound { path: PathBuf },

	#[error("Config source is not a regular file: {path}")]
	SourceInvalid { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config stream")]
	StreamReadError {
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid configuration at line {line_number}: '{}'", .source.line)]
	InvalidConfiguration {
		line_number: usize,
		#[source]
		source: MalformedLineError,
	},

	#[error("No value exists for name: {name}")]
	NameNotFound { name: String },

	#[error("Value for '{name}' is not {expected}: {value}")]
	TypeMismatch {
		name: String,
		value: String,
		expected: &'static str,
	},

	#[error("Failed to inspect path for '{name}': {path}")]
	PathCheckError {
		name: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Path for '{name}' is a directory, expected a file: {path}")]
	NotAFile { name: String, path: PathBuf },

	#[error("Path for '{name}' is not a directory: {path}")]
	NotADirectory { name: String, path: PathBuf },
}

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
