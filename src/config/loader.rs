use crate::config::line::Line;
use crate::config::types::Configuration;
use crate::error::{ConfigError, MalformedLineError, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Load a config file from the given path.
///
/// The path must exist and be a regular file. The file handle is owned by
/// this call and closed before it returns, on success or failure.
pub fn load_file(path: &Path) -> Result<Configuration> {
	let metadata = std::fs::metadata(path).map_err(|source| {
		if source.kind() == std::io::ErrorKind::NotFound {
			ConfigError::SourceNotFound {
				path: path.to_path_buf(),
			}
		} else {
			ConfigError::ReadError {
				path: path.to_path_buf(),
				source,
			}
		}
	})?;

	if !metadata.is_file() {
		return Err(ConfigError::SourceInvalid {
			path: path.to_path_buf(),
		});
	}

	let file = File::open(path).map_err(|source| ConfigError::ReadError {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!(path = %path.display(), "loading config file");
	parse_lines(BufReader::new(file)).map_err(|err| match err {
		ConfigError::StreamReadError { source } => ConfigError::ReadError {
			path: path.to_path_buf(),
			source,
		},
		other => other,
	})
}

/// Load a config from any byte stream, decoded as UTF-8.
pub fn load_reader<R: Read>(reader: R) -> Result<Configuration> {
	tracing::debug!("loading config stream");
	parse_lines(BufReader::new(reader))
}

/// Load a config from a string (useful for testing).
pub fn load_str(content: &str) -> Result<Configuration> {
	parse_lines(content.as_bytes())
}

/// Tokenize every line and collect the directives.
///
/// Nothing is returned unless every line is valid. Later duplicates
/// overwrite earlier ones.
fn parse_lines<B: BufRead>(reader: B) -> Result<Configuration> {
	let mut entries = BTreeMap::new();

	for (index, line) in reader.lines().enumerate() {
		let line_number = index + 1;
		let raw = line.map_err(|source| ConfigError::StreamReadError { source })?;
		let raw = if line_number == 1 {
			raw.strip_prefix('\u{feff}').unwrap_or(&raw)
		} else {
			raw.as_str()
		};

		match Line::parse(raw).map_err(|source| invalid(line_number, source))? {
			Line::Data { name, value } => {
				if let Some(previous) = entries.insert(name.to_string(), value.to_string()) {
					tracing::debug!(
						entry = name,
						line_number,
						previous = %previous,
						"duplicate name overwrites earlier value"
					);
				}
			}
			Line::Blank | Line::Comment => {
				tracing::trace!(line_number, "skipping line without data");
			}
		}
	}

	tracing::debug!(entries = entries.len(), "config loaded");
	Ok(Configuration::new(entries))
}

fn invalid(line_number: usize, source: MalformedLineError) -> ConfigError {
	ConfigError::InvalidConfiguration {
		line_number,
		source,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::MalformedKind;
	use std::io::Cursor;

	#[test]
	fn test_load_empty_config() {
		let config = load_str("").unwrap();
		assert!(config.is_empty());
		assert_eq!(config.size(), 0);
	}

	#[test]
	fn test_load_mixed_separators() {
		let content = "\
retries = 3
timeout: 15.5
name John Smith   # full name
# comment

enabled=true
";
		let config = load_str(content).unwrap();

		assert_eq!(config.size(), 4);
		assert_eq!(config.get_string("retries").unwrap(), "3");
		assert_eq!(config.get_string("timeout").unwrap(), "15.5");
		assert_eq!(config.get_string("name").unwrap(), "John Smith");
		assert_eq!(config.get_string("enabled").unwrap(), "true");
	}

	#[test]
	fn test_crlf_line_endings() {
		let config = load_str("a = 1\r\nb: 2\r\n\r\n# c\r\n").unwrap();
		assert_eq!(config.size(), 2);
		assert_eq!(config.get_string("a").unwrap(), "1");
		assert_eq!(config.get_string("b").unwrap(), "2");
	}

	#[test]
	fn test_duplicate_name_last_write_wins() {
		let config = load_str("level = low\nlevel = high\n").unwrap();
		assert_eq!(config.size(), 1);
		assert_eq!(config.get_string("level").unwrap(), "high");
	}

	#[test]
	fn test_malformed_line_aborts_load() {
		let content = "first = 1\nsecond =\nthird = 3\n";
		let result = load_str(content);

		match result.unwrap_err() {
			ConfigError::InvalidConfiguration {
				line_number,
				source,
			} => {
				assert_eq!(line_number, 2);
				assert_eq!(source.line, "second =");
				assert_eq!(source.kind, MalformedKind::MissingValue);
			}
			other => panic!("Expected InvalidConfiguration error, got {other:?}"),
		}
	}

	#[test]
	fn test_load_reader() {
		let reader = Cursor::new(b"host = localhost\nport: 8080\n".to_vec());
		let config = load_reader(reader).unwrap();
		assert_eq!(config.get_string("host").unwrap(), "localhost");
		assert_eq!(config.get_i32("port").unwrap(), 8080);
	}

	#[test]
	fn test_leading_byte_order_mark_is_ignored() {
		let config = load_reader(Cursor::new("\u{feff}key = value\n".as_bytes())).unwrap();
		assert_eq!(config.get_string("key").unwrap(), "value");
	}

	#[test]
	fn test_invalid_utf8_is_read_error() {
		let reader = Cursor::new(vec![b'k', b' ', 0xff, 0xfe, b'\n']);
		match load_reader(reader).unwrap_err() {
			ConfigError::StreamReadError { source } => {
				assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
			}
			other => panic!("Expected StreamReadError, got {other:?}"),
		}
	}

	#[test]
	fn test_missing_file_is_source_not_found() {
		let result = load_file(Path::new("/nonexistent/linecfg/config.conf"));
		assert!(matches!(
			result.unwrap_err(),
			ConfigError::SourceNotFound { .. }
		));
	}

	#[test]
	fn test_directory_is_source_invalid() {
		let dir = tempfile::tempdir().unwrap();
		match load_file(dir.path()).unwrap_err() {
			ConfigError::SourceInvalid { path } => assert_eq!(path, dir.path()),
			other => panic!("Expected SourceInvalid error, got {other:?}"),
		}
	}
}
