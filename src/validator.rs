//! The per-form validation and masking engine.

use crate::config::{ConfigError, FieldLocator, FieldSpec, FormConfig};
use crate::element::{ElementRef, FormElement, FormRef, InputElement};
use crate::events::{Callback, EventKind, EventRegistry, FormEvent, InputType, SubmitEvent};
use crate::mask::MaskSpec;
use crate::presets;
use crate::status::{FieldStatus, StatusClasses};
use regex::Regex;
use tracing::{debug, trace};

/// One configured field with its patterns compiled and its validity flag.
#[derive(Debug)]
struct CompiledField {
	/// The raw lookup key from the configuration.
	name: String,
	locator: FieldLocator,
	required: bool,
	max_length: Option<usize>,
	pattern: Option<Regex>,
	/// Real-time strip-list, present when keystroke filtering is enabled.
	filter: Option<Regex>,
	mask: Option<MaskSpec>,
	status: bool,
}

impl CompiledField {
	fn compile(spec: &FieldSpec) -> Result<Self, ConfigError> {
		let pattern = spec
			.pattern
			.as_deref()
			.map(presets::resolve_validation)
			.transpose()
			.map_err(|source| ConfigError::Pattern {
				field: spec.field.clone(),
				source,
			})?;

		let filter = if spec.real_time {
			let raw = spec.real_time_pattern.as_deref().ok_or_else(|| {
				ConfigError::MissingRealTimePattern {
					field: spec.field.clone(),
				}
			})?;
			Some(
				presets::resolve_filter(raw).map_err(|source| ConfigError::RealTimePattern {
					field: spec.field.clone(),
					source,
				})?,
			)
		} else {
			None
		};

		let mask = spec
			.mask
			.as_deref()
			.map(|template| {
				if !template.contains('*') {
					return Err(ConfigError::MaskWithoutPlaceholders {
						field: spec.field.clone(),
					});
				}
				let filter = match spec.mask_pattern.as_deref() {
					Some(raw) => Regex::new(raw).map_err(|source| ConfigError::MaskPattern {
						field: spec.field.clone(),
						source,
					})?,
					None => presets::default_mask_filter().clone(),
				};
				Ok(MaskSpec::new(template, filter))
			})
			.transpose()?;

		Ok(Self {
			name: spec.field.clone(),
			locator: FieldLocator::parse(&spec.field),
			required: spec.required,
			max_length: spec.max_length,
			pattern,
			filter,
			mask,
			status: false,
		})
	}

	/// Run the checks in their fixed priority order.
	fn check(&self, value: &str) -> FieldStatus {
		let len = value.chars().count();
		if self.required && len == 0 {
			return FieldStatus::Empty;
		}
		if let Some(max) = self.max_length
			&& len > max
		{
			return FieldStatus::Error;
		}
		if let Some(pattern) = &self.pattern
			&& !pattern.is_match(value)
		{
			return FieldStatus::Error;
		}
		FieldStatus::Correct
	}
}

/// Validation and masking engine bound to a single form.
///
/// The host forwards its `input`, `change`, and `submit` events to
/// [`handle_input`](Self::handle_input),
/// [`handle_change`](Self::handle_change), and
/// [`handle_submit`](Self::handle_submit).
///
/// # Examples
///
/// ```
/// use formcheck::{FieldSpec, FieldValidator, FormConfig, InputElement, MemoryForm, MemoryInput};
/// use std::rc::Rc;
///
/// let email = MemoryInput::named("email").into_ref();
/// let mut form = MemoryForm::new();
/// form.push(email.clone());
///
/// let config = FormConfig::new()
/// 	.with_field(FieldSpec::new("email").required().with_pattern("email"));
/// let mut validator = FieldValidator::new(Rc::new(form), &config).unwrap();
///
/// email.borrow_mut().set_value("a@b.co");
/// assert!(validator.validate());
/// assert!(email.borrow().has_class("correct"));
/// ```
#[derive(Debug)]
pub struct FieldValidator {
	form: FormRef,
	fields: Vec<CompiledField>,
	classes: StatusClasses,
	focus_validate: bool,
	events: EventRegistry,
	status: bool,
}

impl FieldValidator {
	/// Bind a validator to `form`, compiling every field spec.
	///
	/// Construction performs the wiring the configuration asks for:
	/// every field starts invalid, and masked fields get their element's
	/// max input length capped at the template length.
	pub fn new(form: FormRef, config: &FormConfig) -> Result<Self, ConfigError> {
		let fields = config
			.fields
			.iter()
			.map(CompiledField::compile)
			.collect::<Result<Vec<_>, _>>()?;

		let validator = Self {
			form,
			fields,
			classes: StatusClasses::from_overrides(&config.classes),
			focus_validate: config.focus_validate,
			events: EventRegistry::default(),
			status: false,
		};
		validator.cap_masked_elements();
		debug!(fields = validator.fields.len(), "validator bound");
		Ok(validator)
	}

	fn cap_masked_elements(&self) {
		for field in &self.fields {
			if let Some(mask) = &field.mask
				&& let Some(element) = resolve(&self.form, &field.locator)
			{
				element.borrow_mut().set_max_length(mask.len());
			}
		}
	}

	/// Aggregate form status after the last validation pass.
	pub fn status(&self) -> bool {
		self.status
	}

	/// Validity flag of the field at `index` after the last pass.
	pub fn field_status(&self, index: usize) -> Option<bool> {
		self.fields.get(index).map(|f| f.status)
	}

	/// Index of the field configured with the lookup key `field`.
	pub fn field_index(&self, field: &str) -> Option<usize> {
		self.fields.iter().position(|f| f.name == field)
	}

	/// Register a callback for `kind`. Callbacks fire in registration
	/// order.
	pub fn on(&mut self, kind: EventKind, callback: Callback) {
		self.events.push(kind, callback);
	}

	/// Validate every configured field in declaration order.
	///
	/// The aggregate status is true iff every field's flag is true after
	/// the pass.
	pub fn validate(&mut self) -> bool {
		for index in 0..self.fields.len() {
			self.validate_field(index);
		}
		self.status = self.fields.iter().all(|f| f.status);
		debug!(status = self.status, fields = self.fields.len(), "form validated");
		self.status
	}

	/// Validate the field at `index`.
	///
	/// A field whose element does not resolve passes vacuously: its flag
	/// is set, no class is applied, and no event fires. A configuration
	/// typo therefore never blocks submission.
	pub fn validate_field(&mut self, index: usize) {
		let Some(field) = self.fields.get(index) else {
			return;
		};
		let Some(element) = resolve(&self.form, &field.locator) else {
			self.fields[index].status = true;
			return;
		};

		let value = element.borrow().value();
		let status = field.check(&value);
		trace!(field = %field.name, ?status, "field validated");

		self.classes.apply(&element, status);
		self.fields[index].status = status == FieldStatus::Correct;
		self.events.fire(match status {
			FieldStatus::Empty => FormEvent::Empty(&element),
			FieldStatus::Error => FormEvent::Error(&element),
			FieldStatus::Correct => FormEvent::Correct(&element),
		});
	}

	/// Host entry point for an `input` event on the field at `index`.
	///
	/// Applies the real-time strip filter first, then the mask. Deletion
	/// edits skip masking and keep the host's native deletion result.
	pub fn handle_input(&mut self, index: usize, input_type: InputType) {
		let Some(field) = self.fields.get(index) else {
			return;
		};
		let Some(element) = resolve(&self.form, &field.locator) else {
			return;
		};

		if let Some(filter) = &field.filter {
			let mut el = element.borrow_mut();
			let value = el.value();
			let stripped = filter.replace_all(&value, "");
			if stripped != value {
				el.set_value(&stripped);
			}
		}

		if let Some(mask) = &field.mask {
			apply_mask(mask, &element, input_type);
			trace!(field = %field.name, "mask applied");
		}
	}

	/// Host entry point for a `change` event (focus left the field).
	///
	/// Only acts when the configuration enables `focus_validate`.
	pub fn handle_change(&mut self, index: usize) {
		if self.focus_validate {
			self.validate_field(index);
		}
	}

	/// Host entry point for the form's `submit` event.
	///
	/// On success fires `BeforeSubmit`, then either the `Submit`
	/// callbacks (when any are registered) or the host's native
	/// submission. On failure prevents the default action.
	pub fn handle_submit(&mut self, event: &SubmitEvent) {
		self.validate();
		if self.status {
			self.events.fire(FormEvent::BeforeSubmit);
			if self.events.has(EventKind::Submit) {
				self.events.fire(FormEvent::Submit(event));
			} else {
				self.form.submit();
			}
		} else {
			event.prevent_default();
		}
	}
}

fn resolve(form: &FormRef, locator: &FieldLocator) -> Option<ElementRef> {
	match locator {
		FieldLocator::ByName(name) => form.element_by_name(name),
		FieldLocator::BySelector(selector) => form.element_by_selector(selector),
	}
}

/// Transform the element's value through the mask, preserving the cursor
/// when the edit happened mid-string.
fn apply_mask(mask: &MaskSpec, element: &ElementRef, input_type: InputType) {
	if input_type.is_deletion() {
		return;
	}
	let (raw, cursor) = {
		let el = element.borrow();
		(el.value(), el.selection_start())
	};
	let end = raw.chars().count();
	let masked = mask.apply(&raw);

	let mut el = element.borrow_mut();
	el.set_value(&masked);
	// Editing at the end keeps the cursor there naturally; anywhere else
	// the captured position is restored so it does not jump to the end.
	if cursor != end {
		el.set_selection(cursor);
	}
}
