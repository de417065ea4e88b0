//! Host abstraction over form elements.
//!
//! The engine never talks to a browser directly; it talks to these traits.
//! A host wires its real elements behind [`InputElement`] and
//! [`FormElement`], and forwards its `input`/`change`/`submit` events to
//! the validator's `handle_*` entry points. [`MemoryForm`] and
//! [`MemoryInput`] provide an in-memory host that doubles as the
//! reference implementation and the test double.

use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

/// Shared handle to an input element.
///
/// Elements are shared mutable state inside a single-threaded event loop,
/// so handles are `Rc<RefCell<_>>` rather than anything `Send`.
pub type ElementRef = Rc<RefCell<dyn InputElement>>;

/// Shared handle to a form element.
pub type FormRef = Rc<dyn FormElement>;

/// A single input-like element: a value, a cursor, and CSS classes.
pub trait InputElement: Debug {
	/// The element's `name` attribute, if any.
	fn name(&self) -> Option<&str>;

	/// Current value of the element.
	fn value(&self) -> String;

	/// Replace the element's value. The cursor moves to the end.
	fn set_value(&mut self, value: &str);

	/// Cursor position, in characters from the start of the value.
	fn selection_start(&self) -> usize;

	/// Move the cursor (collapsing any selection).
	fn set_selection(&mut self, position: usize);

	fn add_class(&mut self, class: &str);

	fn remove_class(&mut self, class: &str);

	fn has_class(&self, class: &str) -> bool;

	/// Cap the number of characters the element accepts from user input.
	fn set_max_length(&mut self, length: usize);
}

/// A form-like container of input elements.
pub trait FormElement: Debug {
	/// First input-like element whose `name` attribute equals `name`.
	fn element_by_name(&self, name: &str) -> Option<ElementRef>;

	/// First element matching a CSS-style selector.
	fn element_by_selector(&self, selector: &str) -> Option<ElementRef>;

	/// Perform the host's native submission.
	fn submit(&self);
}

/// In-memory input element.
///
/// # Examples
///
/// ```
/// use formcheck::{InputElement, MemoryInput};
///
/// let mut input = MemoryInput::named("email");
/// input.set_value("a@b.co");
/// assert_eq!(input.value(), "a@b.co");
/// assert_eq!(input.selection_start(), 6);
/// ```
#[derive(Debug, Default)]
pub struct MemoryInput {
	name: Option<String>,
	classes: Vec<String>,
	value: String,
	selection: usize,
	max_length: Option<usize>,
}

impl MemoryInput {
	/// Create an input with a `name` attribute.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Create an anonymous input (selector lookup only).
	pub fn anonymous() -> Self {
		Self::default()
	}

	/// Add a CSS class, builder style.
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::{InputElement, MemoryInput};
	///
	/// let input = MemoryInput::anonymous().with_class("phone-input");
	/// assert!(input.has_class("phone-input"));
	/// ```
	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.classes.push(class.into());
		self
	}

	/// Set an initial value, builder style.
	pub fn with_value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self.selection = self.value.chars().count();
		self
	}

	/// Wrap into a shared handle.
	pub fn into_ref(self) -> ElementRef {
		Rc::new(RefCell::new(self))
	}

	/// The configured maximum input length, if any.
	pub fn max_length(&self) -> Option<usize> {
		self.max_length
	}

	/// Simulate typing one character at the cursor.
	///
	/// Honors the max-length cap the way a browser does: insertion into a
	/// full element is dropped.
	pub fn insert(&mut self, ch: char) {
		let len = self.value.chars().count();
		if let Some(max) = self.max_length
			&& len >= max
		{
			return;
		}
		let byte_pos = char_to_byte_index(&self.value, self.selection);
		self.value.insert(byte_pos, ch);
		self.selection += 1;
	}

	/// Simulate a backspace at the cursor.
	pub fn delete_backward(&mut self) {
		if self.selection == 0 {
			return;
		}
		let start = char_to_byte_index(&self.value, self.selection - 1);
		let end = char_to_byte_index(&self.value, self.selection);
		self.value.replace_range(start..end, "");
		self.selection -= 1;
	}
}

impl InputElement for MemoryInput {
	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn value(&self) -> String {
		self.value.clone()
	}

	fn set_value(&mut self, value: &str) {
		self.value = value.to_string();
		self.selection = self.value.chars().count();
	}

	fn selection_start(&self) -> usize {
		self.selection
	}

	fn set_selection(&mut self, position: usize) {
		self.selection = position.min(self.value.chars().count());
	}

	fn add_class(&mut self, class: &str) {
		if !self.has_class(class) {
			self.classes.push(class.to_string());
		}
	}

	fn remove_class(&mut self, class: &str) {
		self.classes.retain(|c| c != class);
	}

	fn has_class(&self, class: &str) -> bool {
		self.classes.iter().any(|c| c == class)
	}

	fn set_max_length(&mut self, length: usize) {
		self.max_length = Some(length);
	}
}

/// In-memory form: an ordered list of elements plus a submission flag.
///
/// # Examples
///
/// ```
/// use formcheck::{FormElement, MemoryForm, MemoryInput};
///
/// let mut form = MemoryForm::new();
/// form.push(MemoryInput::named("email").into_ref());
///
/// assert!(form.element_by_name("email").is_some());
/// assert!(form.element_by_name("phone").is_none());
/// assert!(!form.was_submitted());
/// ```
#[derive(Debug, Default)]
pub struct MemoryForm {
	elements: Vec<ElementRef>,
	submitted: Cell<bool>,
}

impl MemoryForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an element to the form.
	pub fn push(&mut self, element: ElementRef) {
		self.elements.push(element);
	}

	/// Whether native submission has been performed.
	pub fn was_submitted(&self) -> bool {
		self.submitted.get()
	}
}

impl FormElement for MemoryForm {
	fn element_by_name(&self, name: &str) -> Option<ElementRef> {
		self.elements
			.iter()
			.find(|e| e.borrow().name() == Some(name))
			.cloned()
	}

	/// Only class selectors (`.foo`) are understood by the memory host.
	fn element_by_selector(&self, selector: &str) -> Option<ElementRef> {
		let class = selector.strip_prefix('.')?;
		self.elements
			.iter()
			.find(|e| e.borrow().has_class(class))
			.cloned()
	}

	fn submit(&self) {
		self.submitted.set(true);
	}
}

/// Convert a character index into a byte index.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
	s.char_indices()
		.nth(char_idx)
		.map(|(i, _)| i)
		.unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_by_name_finds_first_match() {
		let mut form = MemoryForm::new();
		let first = MemoryInput::named("email").into_ref();
		let second = MemoryInput::named("email").into_ref();
		form.push(first.clone());
		form.push(second);

		let found = form.element_by_name("email").unwrap();
		assert!(Rc::ptr_eq(&found, &first));
	}

	#[test]
	fn test_lookup_by_selector_matches_class() {
		let mut form = MemoryForm::new();
		form.push(MemoryInput::anonymous().with_class("comment").into_ref());

		assert!(form.element_by_selector(".comment").is_some());
		assert!(form.element_by_selector(".missing").is_none());
		// Non-class selectors are not understood by the memory host.
		assert!(form.element_by_selector("comment").is_none());
	}

	#[test]
	fn test_insert_respects_max_length() {
		let mut input = MemoryInput::named("code");
		input.set_max_length(2);
		input.insert('a');
		input.insert('b');
		input.insert('c');
		assert_eq!(input.value(), "ab");
	}

	#[test]
	fn test_insert_at_cursor_mid_string() {
		let mut input = MemoryInput::named("name").with_value("ac");
		input.set_selection(1);
		input.insert('b');
		assert_eq!(input.value(), "abc");
		assert_eq!(input.selection_start(), 2);
	}

	#[test]
	fn test_delete_backward_multibyte() {
		let mut input = MemoryInput::named("name").with_value("ма");
		input.delete_backward();
		assert_eq!(input.value(), "м");
		assert_eq!(input.selection_start(), 1);
	}

	#[test]
	fn test_set_value_moves_cursor_to_end() {
		let mut input = MemoryInput::named("phone");
		input.set_selection(0);
		input.set_value("+7 (");
		assert_eq!(input.selection_start(), 4);
	}
}
