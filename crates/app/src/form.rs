use core::ops::RangeInclusive;

use faraway_core::{DomainError, DomainResult};

use crate::action::NewItem;

/// Quantities offered by the selector.
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=20;

/// The "what do you need for your trip?" form.
///
/// Holds the in-progress input; [`NewItemForm::submit`] is the only gate
/// between what the user typed and the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemForm {
    description: String,
    quantity: u32,
}

impl Default for NewItemForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: *QUANTITY_RANGE.start(),
        }
    }
}

impl NewItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Validate and hand over the item, resetting the form on success.
    ///
    /// A rejected submission leaves the form as the user left it.
    pub fn submit(&mut self) -> DomainResult<NewItem> {
        if self.description.is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if !QUANTITY_RANGE.contains(&self.quantity) {
            return Err(DomainError::out_of_range(
                "quantity",
                i64::from(*QUANTITY_RANGE.start()),
                i64::from(*QUANTITY_RANGE.end()),
                i64::from(self.quantity),
            ));
        }

        let submitted = std::mem::take(self);
        Ok(NewItem {
            description: submitted.description,
            quantity: submitted.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank_with_quantity_one() {
        let form = NewItemForm::new();
        assert_eq!(form.description(), "");
        assert_eq!(form.quantity(), 1);
    }

    #[test]
    fn submit_hands_over_the_item_and_resets() {
        let mut form = NewItemForm::new();
        form.set_description("Sunscreen");
        form.set_quantity(4);

        let item = form.submit().unwrap();
        assert_eq!(
            item,
            NewItem {
                description: "Sunscreen".to_string(),
                quantity: 4,
            }
        );
        assert_eq!(form, NewItemForm::default());
    }

    #[test]
    fn empty_description_is_rejected_and_kept() {
        let mut form = NewItemForm::new();
        form.set_quantity(3);

        let err = form.submit().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(form.quantity(), 3);
    }

    #[test]
    fn whitespace_counts_as_a_description() {
        let mut form = NewItemForm::new();
        form.set_description(" ");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn quantity_outside_the_selector_is_rejected() {
        for quantity in [0, 21] {
            let mut form = NewItemForm::new();
            form.set_description("Socks");
            form.set_quantity(quantity);
            assert_eq!(
                form.submit(),
                Err(DomainError::out_of_range("quantity", 1, 20, i64::from(quantity)))
            );
            assert_eq!(form.description(), "Socks");
        }
    }

    #[test]
    fn bounds_are_accepted() {
        for quantity in [1, 20] {
            let mut form = NewItemForm::new();
            form.set_description("Socks");
            form.set_quantity(quantity);
            assert_eq!(form.submit().unwrap().quantity, quantity);
        }
    }
}
