//! Built-in validation and filtering patterns.
//!
//! Two tables back the named presets a [`FieldSpec`](crate::FieldSpec)
//! may reference: final-format patterns checked at validation time, and
//! strip-lists applied on every keystroke for real-time filtering. Both
//! cover the Latin and Cyrillic alphabets and nothing else.

use regex::Regex;
use std::sync::LazyLock;

// Email: Latin or Cyrillic local part and domain, TLD of two letters or more.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[.0-9a-zA-Zа-яА-Я_-]+@[0-9a-zA-Zа-яА-Я_-]+?\.[a-zA-Zа-яА-Я]{2,}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

// Russian-style phone numbers: +7/7/8 prefix, 10-20 digits or separators.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^((\+7|7|8)+([0-9()\-_ ]){10,20})$").expect("PHONE_REGEX: invalid regex pattern")
});

// Strip-lists: each matches the characters to REMOVE from live input.

static FILTER_TEXT: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[^,A-Za-zА-Яа-я0-9 ]+").expect("FILTER_TEXT: invalid regex pattern")
});

static FILTER_PHONE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[^0-9+\-_() ]+").expect("FILTER_PHONE: invalid regex pattern")
});

static FILTER_NUM: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^0-9]+").expect("FILTER_NUM: invalid regex pattern"));

static FILTER_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[^a-zA-Zа-яА-Я]+").expect("FILTER_LETTERS: invalid regex pattern")
});

static FILTER_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[^A-Za-zА-Яа-я0-9@._-]+").expect("FILTER_EMAIL: invalid regex pattern")
});

// Default mask filter: everything that is not a digit.
static NON_DIGIT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\D").expect("NON_DIGIT: invalid regex pattern"));

/// Final-validation preset for `name`, if one is defined.
///
/// # Examples
///
/// ```
/// use formcheck::presets::validation_preset;
///
/// assert!(validation_preset("email").is_some());
/// assert!(validation_preset("phone").is_some());
/// assert!(validation_preset("zipcode").is_none());
/// ```
pub fn validation_preset(name: &str) -> Option<&'static Regex> {
	match name {
		"email" => Some(&EMAIL_REGEX),
		"phone" => Some(&PHONE_REGEX),
		_ => None,
	}
}

/// Real-time filtering preset for `name`, if one is defined.
///
/// The returned regex matches the characters a keystroke filter removes.
///
/// # Examples
///
/// ```
/// use formcheck::presets::filter_preset;
///
/// let num = filter_preset("num").unwrap();
/// assert_eq!(num.replace_all("a1b2", ""), "12");
/// assert!(filter_preset("digits").is_none());
/// ```
pub fn filter_preset(name: &str) -> Option<&'static Regex> {
	match name {
		"text" => Some(&FILTER_TEXT),
		"phone" => Some(&FILTER_PHONE),
		"num" => Some(&FILTER_NUM),
		"letters" => Some(&FILTER_LETTERS),
		"email" => Some(&FILTER_EMAIL),
		_ => None,
	}
}

/// The filter a mask falls back to: strip everything but digits.
pub fn default_mask_filter() -> &'static Regex {
	&NON_DIGIT
}

/// Resolve a validation pattern: preset name first, literal fallback.
pub(crate) fn resolve_validation(pattern: &str) -> Result<Regex, regex::Error> {
	match validation_preset(pattern) {
		Some(re) => Ok(re.clone()),
		None => Regex::new(pattern),
	}
}

/// Resolve a filtering pattern: preset name first, literal fallback.
pub(crate) fn resolve_filter(pattern: &str) -> Result<Regex, regex::Error> {
	match filter_preset(pattern) {
		Some(re) => Ok(re.clone()),
		None => Regex::new(pattern),
	}
}
