//! Facade over one or more validated forms.

use crate::config::{ConfigError, FormConfig};
use crate::element::FormRef;
use crate::events::{Callback, EventKind};
use crate::validator::FieldValidator;

/// Fans one configuration (and one set of callbacks) out to a validator
/// per form element.
///
/// # Examples
///
/// ```
/// use formcheck::{FieldSpec, FormConfig, FormGroup, MemoryForm, MemoryInput};
/// use std::rc::Rc;
///
/// let mut form = MemoryForm::new();
/// form.push(MemoryInput::named("email").into_ref());
///
/// let config = FormConfig::new().with_field(FieldSpec::new("email").required());
/// let group = FormGroup::new(Rc::new(form), &config).unwrap();
/// assert_eq!(group.len(), 1);
/// ```
#[derive(Debug)]
pub struct FormGroup {
	validators: Vec<FieldValidator>,
}

impl FormGroup {
	/// Group over a single form element.
	pub fn new(form: FormRef, config: &FormConfig) -> Result<Self, ConfigError> {
		Ok(Self {
			validators: vec![FieldValidator::new(form, config)?],
		})
	}

	/// Group over a collection of form elements.
	///
	/// Absent entries are skipped; each present entry gets its own
	/// validator built from the same configuration.
	pub fn from_elements<I>(forms: I, config: &FormConfig) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = Option<FormRef>>,
	{
		let mut validators = Vec::new();
		for form in forms.into_iter().flatten() {
			validators.push(FieldValidator::new(form, config)?);
		}
		Ok(Self { validators })
	}

	/// Forward a callback registration to every contained validator.
	///
	/// The shared handle means a single closure observes all of them.
	pub fn on(&mut self, kind: EventKind, callback: Callback) {
		for validator in &mut self.validators {
			validator.on(kind, callback.clone());
		}
	}

	pub fn len(&self) -> usize {
		self.validators.len()
	}

	pub fn is_empty(&self) -> bool {
		self.validators.is_empty()
	}

	pub fn validators(&self) -> &[FieldValidator] {
		&self.validators
	}

	pub fn validators_mut(&mut self) -> &mut [FieldValidator] {
		&mut self.validators
	}
}
