//! Template masking for formatted inputs.
//!
//! A mask is a literal template with `*` placeholders, e.g.
//! `+7 (***) ***-**-**`. Characters surviving the filter are substituted
//! into the placeholders in order; the display is truncated at the first
//! placeholder left unfilled, so a partially typed value shows only its
//! completed prefix.

use regex::Regex;

/// A compiled mask: the template plus the filter deciding which
/// characters count toward it.
#[derive(Debug, Clone)]
pub struct MaskSpec {
	template: String,
	filter: Regex,
}

impl MaskSpec {
	/// Build a mask from a template and a strip filter.
	///
	/// The filter matches the characters that do NOT count toward the
	/// mask (the digit default is `\D`).
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::MaskSpec;
	/// use regex::Regex;
	///
	/// let mask = MaskSpec::new("+7 (***) ***-**-**", Regex::new(r"\D").unwrap());
	/// assert_eq!(mask.apply("79991234567"), "+7 (999) 123-45-67");
	/// ```
	pub fn new(template: impl Into<String>, filter: Regex) -> Self {
		Self {
			template: template.into(),
			filter,
		}
	}

	pub fn template(&self) -> &str {
		&self.template
	}

	/// Number of characters a masked element should accept.
	pub fn len(&self) -> usize {
		self.template.chars().count()
	}

	pub fn is_empty(&self) -> bool {
		self.template.is_empty()
	}

	/// Substitute the filtered character stream from `raw` into the
	/// template.
	///
	/// Literal template characters that survive the filter themselves
	/// (the `7` in a `+7` phone prefix) seed the stream index, so
	/// re-applying the mask to an already-masked value is a no-op.
	pub fn apply(&self, raw: &str) -> String {
		let stream: Vec<char> = self.filter.replace_all(raw, "").chars().collect();
		let seed = self.filter.replace_all(&self.template, "").chars().count();

		let mut out = String::with_capacity(self.template.len());
		let mut next = seed;
		for ch in self.template.chars() {
			if ch == '*' {
				match stream.get(next) {
					Some(c) => {
						out.push(*c);
						next += 1;
					}
					// Truncate at the first unfilled placeholder.
					None => break,
				}
			} else {
				out.push(ch);
			}
		}
		out
	}
}
