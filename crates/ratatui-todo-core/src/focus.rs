//! Keyboard focus for the to-do widget.
//!
//! The text field is the home focus: [`FocusController::mount`] focuses it the first time the
//! widget is rendered, and [`FocusController::request_input`] moves focus back to it after every
//! store mutation. Requests that arrive before the field has been mounted are skipped.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    Input,
    AddButton,
    List,
    ResetButton,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusController {
    current: FocusTarget,
    mounted: bool,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> FocusTarget {
        self.current
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_input_focused(&self) -> bool {
        self.mounted && self.current == FocusTarget::Input
    }

    /// Marks the text field as available. The first call focuses it.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.current = FocusTarget::Input;
        tracing::trace!("input mounted, focused");
    }

    /// Returns focus to the text field. Returns `false` (and does nothing) before mount.
    pub fn request_input(&mut self) -> bool {
        if !self.mounted {
            tracing::trace!("focus request before mount, skipped");
            return false;
        }
        self.current = FocusTarget::Input;
        true
    }

    pub fn focus(&mut self, target: FocusTarget) {
        self.current = target;
    }

    /// Moves to the next (or previous) focusable region.
    ///
    /// `List` and `ResetButton` are only reachable while the collection has items.
    pub fn cycle(&mut self, has_items: bool, backwards: bool) -> FocusTarget {
        let order: &[FocusTarget] = if has_items {
            &[
                FocusTarget::Input,
                FocusTarget::AddButton,
                FocusTarget::List,
                FocusTarget::ResetButton,
            ]
        } else {
            &[FocusTarget::Input, FocusTarget::AddButton]
        };
        let pos = order.iter().position(|t| *t == self.current).unwrap_or(0);
        let next = if backwards {
            (pos + order.len() - 1) % order.len()
        } else {
            (pos + 1) % order.len()
        };
        self.current = order[next];
        tracing::trace!(focus = ?self.current, "focus cycled");
        self.current
    }

    /// Pulls focus back to the input if it sits on a region that is no longer shown.
    pub fn settle(&mut self, has_items: bool) {
        if !has_items && matches!(self.current, FocusTarget::List | FocusTarget::ResetButton) {
            self.current = FocusTarget::Input;
        }
    }
}
