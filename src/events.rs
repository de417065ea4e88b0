//! Lifecycle events and the callback registry.
//!
//! A minimal synchronous observer: each event kind keeps an ordered list
//! of callback handles, invoked in registration order. Handles are
//! shared (`Rc`) so one closure can be registered with several
//! validators through a [`FormGroup`](crate::FormGroup).

use crate::element::ElementRef;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// The kinds of lifecycle events a validator fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
	/// Fired once the form validated successfully, before submission.
	BeforeSubmit,
	/// Fired instead of native submission when any callback is registered.
	Submit,
	/// A field failed the length or pattern check.
	Error,
	/// A required field was empty.
	Empty,
	/// A field passed every check.
	Correct,
}

impl EventKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			EventKind::BeforeSubmit => "beforeSubmit",
			EventKind::Submit => "submit",
			EventKind::Error => "error",
			EventKind::Empty => "empty",
			EventKind::Correct => "correct",
		}
	}
}

/// Error returned when parsing an unknown event name.
#[derive(Debug, thiserror::Error)]
#[error("unknown event name `{0}`")]
pub struct UnknownEvent(pub String);

impl FromStr for EventKind {
	type Err = UnknownEvent;

	/// Parse the string-keyed event names of the registration API.
	///
	/// # Examples
	///
	/// ```
	/// use formcheck::EventKind;
	///
	/// assert_eq!("beforeSubmit".parse::<EventKind>().unwrap(), EventKind::BeforeSubmit);
	/// assert!("typo".parse::<EventKind>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"beforeSubmit" => Ok(EventKind::BeforeSubmit),
			"submit" => Ok(EventKind::Submit),
			"error" => Ok(EventKind::Error),
			"empty" => Ok(EventKind::Empty),
			"correct" => Ok(EventKind::Correct),
			other => Err(UnknownEvent(other.to_string())),
		}
	}
}

/// A submission event. Hosts inspect `default_prevented` afterwards to
/// decide whether their native submission should proceed.
#[derive(Debug, Default)]
pub struct SubmitEvent {
	prevented: Cell<bool>,
}

impl SubmitEvent {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn prevent_default(&self) {
		self.prevented.set(true);
	}

	pub fn default_prevented(&self) -> bool {
		self.prevented.get()
	}
}

/// The kind of edit that produced an `input` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
	/// Characters were inserted (typing, paste, drop).
	Insertion,
	DeleteContentBackward,
	DeleteContentForward,
	DeleteByCut,
}

impl InputType {
	/// Deletion-type edits bypass masking entirely.
	pub fn is_deletion(&self) -> bool {
		!matches!(self, InputType::Insertion)
	}
}

/// Payload passed to event callbacks.
#[derive(Debug, Clone, Copy)]
pub enum FormEvent<'a> {
	BeforeSubmit,
	Submit(&'a SubmitEvent),
	Error(&'a ElementRef),
	Empty(&'a ElementRef),
	Correct(&'a ElementRef),
}

impl FormEvent<'_> {
	pub fn kind(&self) -> EventKind {
		match self {
			FormEvent::BeforeSubmit => EventKind::BeforeSubmit,
			FormEvent::Submit(_) => EventKind::Submit,
			FormEvent::Error(_) => EventKind::Error,
			FormEvent::Empty(_) => EventKind::Empty,
			FormEvent::Correct(_) => EventKind::Correct,
		}
	}

	/// The affected element, for the per-field events.
	pub fn element(&self) -> Option<&ElementRef> {
		match self {
			FormEvent::Error(e) | FormEvent::Empty(e) | FormEvent::Correct(e) => Some(e),
			_ => None,
		}
	}
}

/// Shared handle to an event callback.
pub type Callback = Rc<RefCell<dyn FnMut(FormEvent<'_>)>>;

/// Wrap a closure into a shareable callback handle.
///
/// # Examples
///
/// ```
/// use formcheck::{callback, FormEvent};
///
/// let cb = callback(|event: FormEvent<'_>| {
/// 	let _ = event.kind();
/// });
/// let _shared = cb.clone();
/// ```
pub fn callback<F>(f: F) -> Callback
where
	F: FnMut(FormEvent<'_>) + 'static,
{
	Rc::new(RefCell::new(f))
}

/// Ordered callback lists, one per event kind. Append-only.
#[derive(Default)]
pub struct EventRegistry {
	before_submit: Vec<Callback>,
	submit: Vec<Callback>,
	error: Vec<Callback>,
	empty: Vec<Callback>,
	correct: Vec<Callback>,
}

impl EventRegistry {
	fn list(&self, kind: EventKind) -> &Vec<Callback> {
		match kind {
			EventKind::BeforeSubmit => &self.before_submit,
			EventKind::Submit => &self.submit,
			EventKind::Error => &self.error,
			EventKind::Empty => &self.empty,
			EventKind::Correct => &self.correct,
		}
	}

	fn list_mut(&mut self, kind: EventKind) -> &mut Vec<Callback> {
		match kind {
			EventKind::BeforeSubmit => &mut self.before_submit,
			EventKind::Submit => &mut self.submit,
			EventKind::Error => &mut self.error,
			EventKind::Empty => &mut self.empty,
			EventKind::Correct => &mut self.correct,
		}
	}

	/// Append a callback to the list for `kind`.
	pub fn push(&mut self, kind: EventKind, callback: Callback) {
		self.list_mut(kind).push(callback);
	}

	/// Whether any callback is registered for `kind`.
	pub fn has(&self, kind: EventKind) -> bool {
		!self.list(kind).is_empty()
	}

	/// Invoke every callback registered for the event's kind, in
	/// registration order.
	pub fn fire(&self, event: FormEvent<'_>) {
		for callback in self.list(event.kind()) {
			(callback.borrow_mut())(event);
		}
	}
}

impl fmt::Debug for EventRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventRegistry")
			.field("before_submit", &self.before_submit.len())
			.field("submit", &self.submit.len())
			.field("error", &self.error.len())
			.field("empty", &self.empty.len())
			.field("correct", &self.correct.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_callbacks_fire_in_registration_order() {
		let log = Rc::new(RefCell::new(Vec::new()));
		let mut registry = EventRegistry::default();

		for tag in ["first", "second", "third"] {
			let log = log.clone();
			registry.push(
				EventKind::BeforeSubmit,
				callback(move |_| log.borrow_mut().push(tag)),
			);
		}

		registry.fire(FormEvent::BeforeSubmit);
		assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
	}

	#[test]
	fn test_fire_only_touches_matching_kind() {
		let count = Rc::new(Cell::new(0));
		let mut registry = EventRegistry::default();

		let c = count.clone();
		registry.push(EventKind::Error, callback(move |_| c.set(c.get() + 1)));

		registry.fire(FormEvent::BeforeSubmit);
		assert_eq!(count.get(), 0);
		assert!(registry.has(EventKind::Error));
		assert!(!registry.has(EventKind::Empty));
	}

	#[test]
	fn test_submit_event_prevent_default() {
		let event = SubmitEvent::new();
		assert!(!event.default_prevented());
		event.prevent_default();
		assert!(event.default_prevented());
	}

	#[test]
	fn test_deletion_input_types() {
		assert!(!InputType::Insertion.is_deletion());
		assert!(InputType::DeleteContentBackward.is_deletion());
		assert!(InputType::DeleteContentForward.is_deletion());
		assert!(InputType::DeleteByCut.is_deletion());
	}

	#[test]
	fn test_event_kind_round_trip() {
		for kind in [
			EventKind::BeforeSubmit,
			EventKind::Submit,
			EventKind::Error,
			EventKind::Empty,
			EventKind::Correct,
		] {
			assert_eq!(kind.as_str().parse::<EventKind>().unwrap(), kind);
		}
	}
}
