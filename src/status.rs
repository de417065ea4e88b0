//! Field validation states and their visual classes.

use crate::config::ClassOverrides;
use crate::element::{ElementRef, InputElement};

/// Validation outcome for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldStatus {
	/// All checks passed.
	Correct,
	/// Required field with an empty value.
	Empty,
	/// Length or pattern check failed.
	Error,
}

impl FieldStatus {
	/// Every status, in the order classes are enumerated.
	pub const ALL: [FieldStatus; 3] = [FieldStatus::Correct, FieldStatus::Empty, FieldStatus::Error];

	pub fn as_str(&self) -> &'static str {
		match self {
			FieldStatus::Correct => "correct",
			FieldStatus::Empty => "empty",
			FieldStatus::Error => "error",
		}
	}
}

/// The three status class names, each defaulting to its own status name.
///
/// # Examples
///
/// ```
/// use formcheck::{FieldStatus, StatusClasses};
///
/// let classes = StatusClasses::default();
/// assert_eq!(classes.class_for(FieldStatus::Error), "error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClasses {
	pub correct: String,
	pub empty: String,
	pub error: String,
}

impl Default for StatusClasses {
	fn default() -> Self {
		Self {
			correct: "correct".to_string(),
			empty: "empty".to_string(),
			error: "error".to_string(),
		}
	}
}

impl StatusClasses {
	/// Build the class set from config overrides, falling back to defaults.
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::{ClassOverrides, FieldStatus, StatusClasses};
	///
	/// let overrides = ClassOverrides {
	/// 	error: Some("is-invalid".to_string()),
	/// 	..ClassOverrides::default()
	/// };
	/// let classes = StatusClasses::from_overrides(&overrides);
	/// assert_eq!(classes.class_for(FieldStatus::Error), "is-invalid");
	/// assert_eq!(classes.class_for(FieldStatus::Correct), "correct");
	/// ```
	pub fn from_overrides(overrides: &ClassOverrides) -> Self {
		let defaults = Self::default();
		Self {
			correct: overrides.correct.clone().unwrap_or(defaults.correct),
			empty: overrides.empty.clone().unwrap_or(defaults.empty),
			error: overrides.error.clone().unwrap_or(defaults.error),
		}
	}

	/// The class name applied for `status`.
	pub fn class_for(&self, status: FieldStatus) -> &str {
		match status {
			FieldStatus::Correct => &self.correct,
			FieldStatus::Empty => &self.empty,
			FieldStatus::Error => &self.error,
		}
	}

	/// Add the winning class and remove the other two.
	///
	/// Mutual exclusivity is enforced by enumerating the full status set
	/// rather than remembering the previously applied class. Idempotent.
	pub fn apply(&self, element: &ElementRef, winner: FieldStatus) {
		let mut element = element.borrow_mut();
		for status in FieldStatus::ALL {
			let class = self.class_for(status);
			if status == winner {
				element.add_class(class);
			} else {
				element.remove_class(class);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::element::{InputElement, MemoryInput};

	#[test]
	fn test_apply_is_mutually_exclusive() {
		let element = MemoryInput::named("field").into_ref();
		let classes = StatusClasses::default();

		classes.apply(&element, FieldStatus::Empty);
		classes.apply(&element, FieldStatus::Error);

		let element = element.borrow();
		assert!(!element.has_class("empty"));
		assert!(!element.has_class("correct"));
		assert!(element.has_class("error"));
	}

	#[test]
	fn test_apply_is_idempotent() {
		let element = MemoryInput::named("field").into_ref();
		let classes = StatusClasses::default();

		classes.apply(&element, FieldStatus::Correct);
		classes.apply(&element, FieldStatus::Correct);

		// A repeated application must not duplicate the class.
		let mut element = element.borrow_mut();
		assert!(element.has_class("correct"));
		element.remove_class("correct");
		assert!(!element.has_class("correct"));
	}

	#[test]
	fn test_apply_leaves_foreign_classes_alone() {
		let element = MemoryInput::anonymous().with_class("form-control").into_ref();
		let classes = StatusClasses::default();

		classes.apply(&element, FieldStatus::Error);

		assert!(element.borrow().has_class("form-control"));
	}

	#[test]
	fn test_overridden_classes_are_applied() {
		let element = MemoryInput::named("field").into_ref();
		let overrides = ClassOverrides {
			correct: Some("ok".to_string()),
			empty: None,
			error: None,
		};
		let classes = StatusClasses::from_overrides(&overrides);

		classes.apply(&element, FieldStatus::Correct);
		assert!(element.borrow().has_class("ok"));

		classes.apply(&element, FieldStatus::Empty);
		let element = element.borrow();
		assert!(!element.has_class("ok"));
		assert!(element.has_class("empty"));
	}
}
