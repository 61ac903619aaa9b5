use crate::error::{MalformedKind, MalformedLineError};
use regex::Regex;
use std::sync::LazyLock;

/// `name`, then the first separator, then everything else.
///
/// The explicit `=`/`:` form is listed first so that `a = b` splits on the
/// `=` rather than on the leading space.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?<name>[^\s=:#]+)(?:\s*[=:]\s*|\s+)(?<rest>.*)$")
		.expect("directive pattern is valid")
});

/// Classification of one raw line of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
	/// Empty or whitespace only.
	Blank,

	/// First non-whitespace character is `#`.
	Comment,

	/// A `name <separator> value` directive.
	Data { name: &'a str, value: &'a str },
}

impl<'a> Line<'a> {
	/// Tokenize a single line. `raw` must not include its line terminator.
	pub fn parse(raw: &'a str) -> Result<Self, MalformedLineError> {
		let trimmed = raw.trim();

		if trimmed.is_empty() {
			return Ok(Line::Blank);
		}
		if trimmed.starts_with('#') {
			return Ok(Line::Comment);
		}

		let Some(caps) = DIRECTIVE.captures(trimmed) else {
			return Err(malformed(raw, classify_unsplittable(trimmed)));
		};

		// Both groups are mandatory in the pattern.
		let (Some(name), Some(rest)) = (caps.name("name"), caps.name("rest")) else {
			return Err(malformed(raw, MalformedKind::MissingSeparator));
		};
		let rest = rest.as_str();

		if rest.starts_with(['=', ':']) {
			return Err(malformed(raw, MalformedKind::ExtraSeparator));
		}

		let value = strip_inline_comment(rest);
		if value.is_empty() {
			return Err(malformed(raw, MalformedKind::MissingValue));
		}

		Ok(Line::Data {
			name: name.as_str(),
			value,
		})
	}
}

/// Cut the value at the first `#` and trim what is left.
fn strip_inline_comment(rest: &str) -> &str {
	match rest.find('#') {
		Some(pos) => rest[..pos].trim(),
		None => rest.trim(),
	}
}

/// Work out why a non-blank, non-comment line did not split.
fn classify_unsplittable(trimmed: &str) -> MalformedKind {
	if trimmed.starts_with(['=', ':']) {
		return MalformedKind::MissingName;
	}
	let name_len = trimmed
		.find(|c: char| c.is_whitespace() || matches!(c, '=' | ':' | '#'))
		.unwrap_or(trimmed.len());
	if name_len == trimmed.len() {
		MalformedKind::MissingSeparator
	} else {
		MalformedKind::InvalidName
	}
}

fn malformed(raw: &str, kind: MalformedKind) -> MalformedLineError {
	MalformedLineError {
		line: raw.to_string(),
		kind,
	}
}
