//! Form configuration: field specs, class overrides, and their parsing.
//!
//! Configurations deserialize from the same camelCase JSON shape the
//! browser-side ancestor of this engine consumed, and can equally be
//! built in code with the builder methods.

use serde::Deserialize;

/// Errors detected while compiling a form configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid pattern for field `{field}`: {source}")]
	Pattern {
		field: String,
		source: regex::Error,
	},
	#[error("invalid real-time pattern for field `{field}`: {source}")]
	RealTimePattern {
		field: String,
		source: regex::Error,
	},
	#[error("field `{field}` enables real-time filtering without a pattern")]
	MissingRealTimePattern { field: String },
	#[error("invalid mask pattern for field `{field}`: {source}")]
	MaskPattern {
		field: String,
		source: regex::Error,
	},
	#[error("mask for field `{field}` has no `*` placeholders")]
	MaskWithoutPlaceholders { field: String },
}

/// Where to find a field's element inside the form.
///
/// The string convention of the configuration (`.foo` means selector,
/// anything else means name attribute) is decided once here instead of
/// being re-tested on every lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLocator {
	/// Match on the `name` attribute.
	ByName(String),
	/// Match with a CSS-style selector.
	BySelector(String),
}

impl FieldLocator {
	/// A leading `.` marks a selector; anything else is a name attribute.
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::FieldLocator;
	///
	/// assert_eq!(FieldLocator::parse("email"), FieldLocator::ByName("email".to_string()));
	/// assert_eq!(
	/// 	FieldLocator::parse(".comment"),
	/// 	FieldLocator::BySelector(".comment".to_string()),
	/// );
	/// ```
	pub fn parse(field: &str) -> Self {
		if field.starts_with('.') {
			FieldLocator::BySelector(field.to_string())
		} else {
			FieldLocator::ByName(field.to_string())
		}
	}
}

/// Configuration for a single validated field.
///
/// `pattern` and `real_time_pattern` accept either a preset name
/// (`email`, `phone`, ...) or a literal regex; `mask_pattern` is always
/// a literal regex.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
	/// Element lookup key: name attribute, or selector when it starts
	/// with `.`.
	#[serde(alias = "fieldName")]
	pub field: String,
	/// Whether an empty value fails validation.
	#[serde(default)]
	pub required: bool,
	/// Maximum accepted value length, in characters.
	#[serde(default)]
	pub max_length: Option<usize>,
	/// Final-format check: preset name or literal pattern.
	#[serde(default, alias = "regExp")]
	pub pattern: Option<String>,
	/// Enable keystroke filtering.
	#[serde(default)]
	pub real_time: bool,
	/// Strip-list for keystroke filtering: preset name or literal pattern.
	#[serde(default, alias = "realTimeRegExp")]
	pub real_time_pattern: Option<String>,
	/// Literal template with `*` placeholders.
	#[serde(default)]
	pub mask: Option<String>,
	/// Which characters count toward the mask; defaults to digits.
	#[serde(default, alias = "maskRegExp")]
	pub mask_pattern: Option<String>,
}

impl FieldSpec {
	/// Create a spec for `field` with every check disabled.
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::FieldSpec;
	///
	/// let spec = FieldSpec::new("email");
	/// assert_eq!(spec.field, "email");
	/// assert!(!spec.required);
	/// assert_eq!(spec.max_length, None);
	/// ```
	pub fn new(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			required: false,
			max_length: None,
			pattern: None,
			real_time: false,
			real_time_pattern: None,
			mask: None,
			mask_pattern: None,
		}
	}

	/// Mark the field as required.
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::FieldSpec;
	///
	/// let spec = FieldSpec::new("email").required();
	/// assert!(spec.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set the maximum accepted length.
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Set the final-format check (preset name or literal pattern).
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::FieldSpec;
	///
	/// let spec = FieldSpec::new("email").with_pattern("email");
	/// assert_eq!(spec.pattern.as_deref(), Some("email"));
	/// ```
	pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	/// Enable keystroke filtering with the given strip-list.
	pub fn with_real_time(mut self, pattern: impl Into<String>) -> Self {
		self.real_time = true;
		self.real_time_pattern = Some(pattern.into());
		self
	}

	/// Set a mask template (`*` marks a placeholder).
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::FieldSpec;
	///
	/// let spec = FieldSpec::new("phone").with_mask("+7 (***) ***-**-**");
	/// assert!(spec.mask.is_some());
	/// ```
	pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
		self.mask = Some(mask.into());
		self
	}

	/// Override the characters that count toward the mask.
	pub fn with_mask_pattern(mut self, pattern: impl Into<String>) -> Self {
		self.mask_pattern = Some(pattern.into());
		self
	}
}

/// Overrides for the three status class names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassOverrides {
	#[serde(default)]
	pub correct: Option<String>,
	#[serde(default)]
	pub empty: Option<String>,
	#[serde(default)]
	pub error: Option<String>,
}

/// Top-level configuration for one form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
	/// Validated fields, in declaration order.
	#[serde(default)]
	pub fields: Vec<FieldSpec>,
	/// Status class overrides.
	#[serde(default)]
	pub classes: ClassOverrides,
	/// Re-validate a field whenever focus leaves it.
	#[serde(default)]
	pub focus_validate: bool,
}

impl FormConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a field spec, builder style.
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::{FieldSpec, FormConfig};
	///
	/// let config = FormConfig::new()
	/// 	.with_field(FieldSpec::new("email").required().with_pattern("email"))
	/// 	.with_field(FieldSpec::new("name").with_max_length(50));
	/// assert_eq!(config.fields.len(), 2);
	/// ```
	pub fn with_field(mut self, field: FieldSpec) -> Self {
		self.fields.push(field);
		self
	}

	/// Override the status class names.
	pub fn with_classes(mut self, classes: ClassOverrides) -> Self {
		self.classes = classes;
		self
	}

	/// Enable change-driven re-validation.
	pub fn focus_validate(mut self) -> Self {
		self.focus_validate = true;
		self
	}

	/// Parse a configuration from its JSON representation.
	///
	/// Accepts the camelCase key names of the original browser
	/// configuration (`fieldName`, `regExp`, `maxLength`, ...).
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::FormConfig;
	///
	/// let config = FormConfig::from_json(
	/// 	r#"{"fields": [{"fieldName": "email", "required": true, "regExp": "email"}]}"#,
	/// )
	/// .unwrap();
	/// assert_eq!(config.fields[0].field, "email");
	/// assert!(config.fields[0].required);
	/// ```
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_locator_keeps_selector_prefix() {
		match FieldLocator::parse(".phone-input") {
			FieldLocator::BySelector(s) => assert_eq!(s, ".phone-input"),
			other => panic!("expected selector locator, got {other:?}"),
		}
	}

	#[test]
	fn test_json_config_with_camel_case_keys() {
		let config = FormConfig::from_json(
			r#"{
				"fields": [
					{
						"fieldName": "phone",
						"required": true,
						"maxLength": 18,
						"realTime": true,
						"realTimeRegExp": "phone",
						"mask": "+7 (***) ***-**-**",
						"maskRegExp": "[^0-9]"
					}
				],
				"classes": {"correct": "ok", "error": "bad"},
				"focusValidate": true
			}"#,
		)
		.unwrap();

		assert!(config.focus_validate);
		assert_eq!(config.classes.correct.as_deref(), Some("ok"));
		assert_eq!(config.classes.empty, None);

		let field = &config.fields[0];
		assert_eq!(field.field, "phone");
		assert!(field.required);
		assert_eq!(field.max_length, Some(18));
		assert!(field.real_time);
		assert_eq!(field.real_time_pattern.as_deref(), Some("phone"));
		assert_eq!(field.mask.as_deref(), Some("+7 (***) ***-**-**"));
		assert_eq!(field.mask_pattern.as_deref(), Some("[^0-9]"));
	}

	#[test]
	fn test_json_config_minimal_field() {
		let config =
			FormConfig::from_json(r#"{"fields": [{"field": "comment"}]}"#).unwrap();
		let field = &config.fields[0];
		assert!(!field.required);
		assert_eq!(field.pattern, None);
		assert_eq!(field.mask, None);
		assert!(!config.focus_validate);
	}

	#[test]
	fn test_json_config_rejects_missing_field_name() {
		assert!(FormConfig::from_json(r#"{"fields": [{"required": true}]}"#).is_err());
	}
}
