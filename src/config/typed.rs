//! Typed accessors over a [`Configuration`].
//!
//! Every accessor is strict: an absent name is `ConfigError::NameNotFound`,
//! and a value that does not coerce is `ConfigError::TypeMismatch` carrying
//! the offending text.

use crate::config::types::Configuration;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

impl Configuration {
	/// The raw value, unchanged.
	pub fn get_string(&self, name: &str) -> Result<&str> {
		self.lookup(name)
	}

	/// Parse the value with `T`'s [`FromStr`] implementation.
	pub fn get_parsed<T: FromStr>(&self, name: &str) -> Result<T> {
		self.parse_as(name, std::any::type_name::<T>())
	}

	fn parse_as<T: FromStr>(&self, name: &str, expected: &'static str) -> Result<T> {
		let value = self.lookup(name)?;
		value
			.parse()
			.map_err(|_| mismatch(name, value, expected))
	}

	/// `true`/`1` or `false`/`0`, ignoring case.
	pub fn get_bool(&self, name: &str) -> Result<bool> {
		let value = self.lookup(name)?;
		if value.eq_ignore_ascii_case("true") || value == "1" {
			Ok(true)
		} else if value.eq_ignore_ascii_case("false") || value == "0" {
			Ok(false)
		} else {
			Err(mismatch(name, value, "a boolean"))
		}
	}

	pub fn get_i8(&self, name: &str) -> Result<i8> {
		self.parse_as(name, "an 8-bit integer")
	}

	pub fn get_i16(&self, name: &str) -> Result<i16> {
		self.parse_as(name, "a 16-bit integer")
	}

	pub fn get_i32(&self, name: &str) -> Result<i32> {
		self.parse_as(name, "a 32-bit integer")
	}

	pub fn get_i64(&self, name: &str) -> Result<i64> {
		self.parse_as(name, "a 64-bit integer")
	}

	pub fn get_u8(&self, name: &str) -> Result<u8> {
		self.parse_as(name, "an unsigned 8-bit integer")
	}

	pub fn get_u16(&self, name: &str) -> Result<u16> {
		self.parse_as(name, "an unsigned 16-bit integer")
	}

	pub fn get_u32(&self, name: &str) -> Result<u32> {
		self.parse_as(name, "an unsigned 32-bit integer")
	}

	pub fn get_u64(&self, name: &str) -> Result<u64> {
		self.parse_as(name, "an unsigned 64-bit integer")
	}

	pub fn get_usize(&self, name: &str) -> Result<usize> {
		self.parse_as(name, "an unsigned integer")
	}

	pub fn get_f32(&self, name: &str) -> Result<f32> {
		self.parse_as(name, "a 32-bit float")
	}

	pub fn get_f64(&self, name: &str) -> Result<f64> {
		self.parse_as(name, "a 64-bit float")
	}

	/// Succeeds only when the value is exactly one character.
	pub fn get_char(&self, name: &str) -> Result<char> {
		let value = self.lookup(name)?;
		let mut chars = value.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(c),
			_ => Err(mismatch(name, value, "a single character")),
		}
	}

	/// The value as a path. Existence is not checked.
	pub fn get_file(&self, name: &str) -> Result<PathBuf> {
		self.lookup(name).map(PathBuf::from)
	}

	/// The value as a path that must exist and must not be a directory.
	pub fn get_verified_file(&self, name: &str) -> Result<PathBuf> {
		let path = self.get_file(name)?;
		let metadata = existing(name, &path)?;
		if metadata.is_dir() {
			return Err(ConfigError::NotAFile {
				name: name.to_string(),
				path,
			});
		}
		Ok(path)
	}

	/// The value as a path that must exist and must be a directory.
	pub fn get_verified_directory(&self, name: &str) -> Result<PathBuf> {
		let path = self.get_file(name)?;
		let metadata = existing(name, &path)?;
		if !metadata.is_dir() {
			return Err(ConfigError::NotADirectory {
				name: name.to_string(),
				path,
			});
		}
		Ok(path)
	}
}

fn existing(name: &str, path: &Path) -> Result<std::fs::Metadata> {
	std::fs::metadata(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			ConfigError::SourceNotFound {
				path: path.to_path_buf(),
			}
		} else {
			ConfigError::PathCheckError {
				name: name.to_string(),
				path: path.to_path_buf(),
				source,
			}
		}
	})
}

fn mismatch(name: &str, value: &str, expected: &'static str) -> ConfigError {
	ConfigError::TypeMismatch {
		name: name.to_string(),
		value: value.to_string(),
		expected,
	}
}
