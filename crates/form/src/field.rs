//! Field input states and per-field errors.

/// Raw state of a typed form field.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    /// Nothing entered.
    Empty,
    Value(T),
    /// Text that did not parse; kept so it can be shown back.
    Invalid(String),
}

impl<T: core::str::FromStr> Input<T> {
    /// Interpret text the way a text box delivers it.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Input::Empty;
        }
        match trimmed.parse() {
            Ok(value) => Input::Value(value),
            Err(_) => Input::Invalid(text.to_string()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Price,
    Quantity,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::Quantity => "quantity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl FieldError {
    pub(crate) fn new(field: FormField, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message)
    }
}
