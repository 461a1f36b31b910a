//! Placeholder scanning.
//!
//! A placeholder is `{{`, an optional whitespace character, an identifier made
//! of `[A-Za-z0-9_-]`, an optional whitespace character and `}}`. There is no
//! escaping, no nesting and no expression syntax.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\{\{\s?[A-Za-z0-9_-]+\s?\}\}").expect("PLACEHOLDER_REGEX: invalid regex pattern")
});

/// One `{{ name }}` occurrence inside a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
	/// The token exactly as written, delimiters included.
	pub raw: &'a str,
	/// Byte range of the token inside the scanned text.
	pub range: Range<usize>,
}

impl<'a> Placeholder<'a> {
	/// The bare identifier.
	pub fn name(&self) -> &'a str {
		clean_placeholder(self.raw)
	}
}

/// Finds every placeholder in `text`, in order.
///
/// Returns `None` when the text contains no placeholder at all.
///
/// # Example
///
/// ```ignore
/// let found = find_placeholders("Hello {{ name }}, {{greeting}}").unwrap();
/// assert_eq!(found[0].raw, "{{ name }}");
/// assert_eq!(found[1].name(), "greeting");
/// ```
pub fn find_placeholders(text: &str) -> Option<Vec<Placeholder<'_>>> {
	let found: Vec<Placeholder<'_>> = PLACEHOLDER_REGEX
		.find_iter(text)
		.map(|m| Placeholder {
			raw: m.as_str(),
			range: m.range(),
		})
		.collect();
	(!found.is_empty()).then_some(found)
}

/// Strips the `{{`/`}}` delimiters and surrounding whitespace from a token.
pub fn clean_placeholder(raw: &str) -> &str {
	let inner = raw.strip_prefix("{{").unwrap_or(raw);
	let inner = inner.strip_suffix("}}").unwrap_or(inner);
	inner.trim()
}

/// Rewrites `text`, replacing each placeholder for which `resolve` returns a
/// value. Unresolved placeholders are kept verbatim.
///
/// Returns `None` when nothing was replaced, so callers can skip touching the
/// document.
pub fn replace_placeholders<F>(text: &str, mut resolve: F) -> Option<String>
where
	F: FnMut(&str) -> Option<String>,
{
	let placeholders = find_placeholders(text)?;
	let mut out = String::with_capacity(text.len());
	let mut last = 0;
	let mut replaced = false;

	for placeholder in &placeholders {
		out.push_str(&text[last..placeholder.range.start]);
		match resolve(placeholder.name()) {
			Some(value) => {
				out.push_str(&value);
				replaced = true;
			}
			None => out.push_str(placeholder.raw),
		}
		last = placeholder.range.end;
	}
	out.push_str(&text[last..]);

	replaced.then_some(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("{{name}}", "name")]
	#[case("{{ name }}", "name")]
	#[case("{{ first_name}}", "first_name")]
	#[case("{{item-2 }}", "item-2")]
	fn test_clean_placeholder(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(clean_placeholder(raw), expected);
	}

	#[rstest]
	#[case("plain text")]
	#[case("{{}}")]
	#[case("{{  two_spaces  }}")]
	#[case("{{ has space }}")]
	#[case("{{ dotted.name }}")]
	#[case("{ single }")]
	fn test_no_placeholders(#[case] text: &str) {
		assert!(find_placeholders(text).is_none());
	}

	#[rstest]
	fn test_find_placeholders_in_order() {
		let text = "{{a}} and {{ b }} and {{a}}";
		let found = find_placeholders(text).unwrap();
		let names: Vec<&str> = found.iter().map(Placeholder::name).collect();
		assert_eq!(names, vec!["a", "b", "a"]);
		assert_eq!(&text[found[1].range.clone()], "{{ b }}");
	}

	#[rstest]
	fn test_whitespace_may_be_a_newline() {
		let found = find_placeholders("{{\nname\n}}").unwrap();
		assert_eq!(found[0].name(), "name");
	}

	#[rstest]
	fn test_replace_keeps_unresolved() {
		let out = replace_placeholders("{{a}}-{{b}}-{{a}}", |name| {
			(name == "a").then(|| "1".to_string())
		});
		assert_eq!(out.as_deref(), Some("1-{{b}}-1"));
	}

	#[rstest]
	fn test_replace_returns_none_without_changes() {
		assert!(replace_placeholders("{{a}}", |_| None).is_none());
		assert!(replace_placeholders("nothing", |_| Some("x".into())).is_none());
	}

	#[rstest]
	fn test_replaced_values_are_not_rescanned() {
		let out = replace_placeholders("{{a}} {{b}}", |name| match name {
			"a" => Some("{{b}}".to_string()),
			_ => None,
		});
		assert_eq!(out.as_deref(), Some("{{b}} {{b}}"));
	}
}
