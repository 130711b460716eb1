//! Confirmation of destructive actions.
//!
//! Asking is a presentation decision; the list's own `clear` never asks.

use crate::action::Action;
use crate::dispatcher::Dispatcher;

/// The question put to the user before the list is cleared.
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all items?";

/// Something that can ask the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Ask, and clear the list only on a yes. Returns whether it was cleared.
pub fn request_clear(dispatcher: &mut Dispatcher, confirm: &mut impl Confirm) -> bool {
    if !confirm.confirm(CLEAR_PROMPT) {
        tracing::debug!("clear declined");
        return false;
    }
    dispatcher.dispatch(Action::ClearList);
    true
}
