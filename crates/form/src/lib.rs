//! `shoplist-form`: item entry form.
//!
//! Collects raw field input, validates it, and hands a candidate item to the
//! store's create operation. Nothing reaches the store unless every required
//! field is valid.

pub mod field;
pub mod form;

pub use field::{FieldError, FormField, Input};
pub use form::{FormError, ItemForm};
