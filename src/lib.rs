//! Form field validation and input masking.
//!
//! This crate provides a small client-side-style validation engine:
//! - per-field checks (required, max length, preset or literal patterns)
//!   with mutually-exclusive visual state classes
//! - live keystroke filtering against character allowlists
//! - template masking (`+7 (***) ***-**-**`) with cursor preservation
//! - lifecycle callbacks around submission
//!
//! The engine binds to form elements through the host traits in
//! [`element`]; an in-memory host ships with the crate.
//!
//! # Examples
//!
//! ```
//! use formcheck::{FieldSpec, FieldValidator, FormConfig, InputElement, MemoryForm, MemoryInput};
//! use std::rc::Rc;
//!
//! let email = MemoryInput::named("email").into_ref();
//! let mut form = MemoryForm::new();
//! form.push(email.clone());
//!
//! let config = FormConfig::new()
//! 	.with_field(FieldSpec::new("email").required().with_pattern("email"));
//! let mut validator = FieldValidator::new(Rc::new(form), &config).unwrap();
//!
//! email.borrow_mut().set_value("a@b.co");
//! assert!(validator.validate());
//! assert!(email.borrow().has_class("correct"));
//! ```

pub mod config;
pub mod element;
pub mod events;
pub mod group;
pub mod mask;
pub mod presets;
pub mod status;
pub mod validator;

pub use config::{ClassOverrides, ConfigError, FieldLocator, FieldSpec, FormConfig};
pub use element::{ElementRef, FormElement, FormRef, InputElement, MemoryForm, MemoryInput};
pub use events::{
	Callback, EventKind, FormEvent, InputType, SubmitEvent, UnknownEvent, callback,
};
pub use group::FormGroup;
pub use mask::MaskSpec;
pub use status::{FieldStatus, StatusClasses};
pub use validator::FieldValidator;
