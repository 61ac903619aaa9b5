use crate::config::loader::{load_file, load_reader, load_str};
use crate::error::{ConfigError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// A loaded configuration: every `name -> value` directive of one source.
///
/// Built once by the loader and immutable afterwards, so a shared reference
/// can be read from any number of threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
	entries: BTreeMap<String, String>,
}

impl Configuration {
	pub(crate) fn new(entries: BTreeMap<String, String>) -> Self {
		Configuration { entries }
	}

	/// Load the config file at `path`.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		load_file(path.as_ref())
	}

	/// Load a config from a UTF-8 byte stream.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		load_reader(reader)
	}

	/// Load a config from in-memory text.
	pub fn parse_str(content: &str) -> Result<Self> {
		load_str(content)
	}

	/// Names of all entries, in name order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Raw values of all entries, in name order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.entries.values().map(String::as_str)
	}

	/// All `(name, value)` pairs, in name order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
		self.iter()
	}

	pub fn iter(&self) -> Iter<'_> {
		Iter {
			inner: self.entries.iter(),
		}
	}

	/// Number of entries.
	pub fn size(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Look up the raw value for `name`, failing if it is absent.
	pub(crate) fn lookup(&self, name: &str) -> Result<&str> {
		self.entries
			.get(name)
			.map(String::as_str)
			.ok_or_else(|| ConfigError::NameNotFound {
				name: name.to_string(),
			})
	}
}

impl FromStr for Configuration {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self> {
		load_str(s)
	}
}

/// Iterator over the `(name, value)` pairs of a [`Configuration`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
	inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = (&'a str, &'a str);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner
			.next()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Configuration {
	type Item = (&'a str, &'a str);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Configuration {
		"beta = 2\nalpha: 1\ngamma three\n".parse().unwrap()
	}

	#[test]
	fn test_enumeration_is_sorted_by_name() {
		let config = sample();
		assert_eq!(config.names().collect::<Vec<_>>(), ["alpha", "beta", "gamma"]);
		assert_eq!(config.values().collect::<Vec<_>>(), ["1", "2", "three"]);
		assert_eq!(
			config.entries().collect::<Vec<_>>(),
			[("alpha", "1"), ("beta", "2"), ("gamma", "three")]
		);
	}

	#[test]
	fn test_size_and_contains() {
		let config = sample();
		assert_eq!(config.size(), 3);
		assert!(!config.is_empty());
		assert!(config.contains("beta"));
		assert!(!config.contains("delta"));
	}

	#[test]
	fn test_into_iterator_for_reference() {
		let config = sample();
		let mut count = 0;
		for (name, value) in &config {
			assert_eq!(config.get_string(name).unwrap(), value);
			count += 1;
		}
		assert_eq!(count, config.iter().len());
	}

	#[test]
	fn test_lookup_missing_name() {
		match sample().lookup("missing").unwrap_err() {
			ConfigError::NameNotFound { name } => assert_eq!(name, "missing"),
			other => panic!("Expected NameNotFound error, got {other:?}"),
		}
	}

	#[test]
	fn test_serialize_as_flat_table() {
		let rendered = toml::to_string(&sample()).unwrap();
		assert!(rendered.contains("alpha = \"1\""));
		assert!(rendered.contains("gamma = \"three\""));
	}

	#[test]
	fn test_shared_across_threads() {
		let config = std::sync::Arc::new(sample());
		let handles: Vec<_> = (0..4)
			.map(|_| {
				let config = std::sync::Arc::clone(&config);
				std::thread::spawn(move || config.get_i32("alpha").unwrap())
			})
			.collect();

		for handle in handles {
			assert_eq!(handle.join().unwrap(), 1);
		}
	}
}
