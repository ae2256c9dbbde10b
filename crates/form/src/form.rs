//! The item entry form.

use shoplist_core::{Item, ItemId};
use shoplist_store::{ItemRepository, StoreError};

use crate::field::{FieldError, FormField, Input};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// One entry per failing field; nothing was sent.
    #[error("invalid form: {}", join(.0))]
    Invalid(Vec<FieldError>),
    /// The form was valid but the store refused or could not be reached.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn join(errors: &[FieldError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl FormError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            FormError::Invalid(errors) => errors,
            FormError::Store(_) => &[],
        }
    }
}

/// Form state for one candidate item.
///
/// Starts with an empty name and price, quantity 1, unchecked, and a
/// placeholder id taken at initialization. The candidate handed to the store
/// is these values verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    id: ItemId,
    name: String,
    price: Input<f64>,
    quantity: Input<u32>,
    checked: bool,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemForm {
    pub fn new() -> Self {
        Self {
            id: ItemId::placeholder(),
            name: String::new(),
            price: Input::Empty,
            quantity: Input::Value(1),
            checked: false,
        }
    }

    /// Prefill the form from a stored item, keeping its id.
    pub fn edit(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: Input::Value(item.price),
            quantity: Input::Value(item.quantity),
            checked: item.checked,
        }
    }

    /// Clear every field and take a fresh placeholder id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = Input::Value(price);
    }

    pub fn set_price_text(&mut self, text: &str) {
        self.price = Input::parse(text);
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = Input::Value(quantity);
    }

    pub fn set_quantity_text(&mut self, text: &str) {
        self.quantity = Input::parse(text);
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check every field and build the candidate item.
    pub fn validate(&self) -> Result<Item, FormError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new(FormField::Name, "is required"));
        }

        let price = match &self.price {
            Input::Value(p) if p.is_finite() && *p >= 0.0 => Some(*p),
            Input::Value(_) => {
                errors.push(FieldError::new(FormField::Price, "must not be negative"));
                None
            }
            Input::Empty => {
                errors.push(FieldError::new(FormField::Price, "is required"));
                None
            }
            Input::Invalid(_) => {
                errors.push(FieldError::new(FormField::Price, "must be a number"));
                None
            }
        };

        let quantity = match &self.quantity {
            Input::Value(q) if *q >= 1 => Some(*q),
            Input::Value(_) => {
                errors.push(FieldError::new(FormField::Quantity, "must be at least 1"));
                None
            }
            Input::Empty => {
                errors.push(FieldError::new(FormField::Quantity, "is required"));
                None
            }
            Input::Invalid(_) => {
                errors.push(FieldError::new(FormField::Quantity, "must be a whole number"));
                None
            }
        };

        match (price, quantity) {
            (Some(price), Some(quantity)) if errors.is_empty() => Ok(Item {
                id: self.id.clone(),
                name: self.name.clone(),
                price,
                quantity,
                checked: self.checked,
            }),
            _ => Err(FormError::Invalid(errors)),
        }
    }

    /// Validate, then hand the candidate to `store.create`.
    ///
    /// Invalid input never reaches the store. Confirmation and list refresh
    /// are the store's business; the store's answer is only passed through.
    pub async fn submit<R>(&self, store: &R) -> Result<Option<ItemId>, FormError>
    where
        R: ItemRepository + ?Sized,
    {
        let item = self.validate()?;
        tracing::debug!(placeholder = %item.id, name = %item.name, "submitting item");
        Ok(store.create(&item).await?)
    }
}
