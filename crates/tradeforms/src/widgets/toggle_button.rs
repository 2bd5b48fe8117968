//! Radio-look control that deselects on a second click.
//!
//! A stock radio button stays selected once clicked; [`ToggleRadioButton`]
//! behaves as a plain 2-state toggle instead: the first primary click selects,
//! the next deselects, and so on. Useful for optional single-choice rows
//! where "none of the above" is a valid answer.

use tradeforms_core::Signal;

use super::mouse::MouseButton;

/// A selectable control whose primary click toggles the checked state.
///
/// # Signals
///
/// - `toggled(bool)`: Emitted when the checked state changes
/// - `clicked(bool)`: Emitted on every effective click, with the new state
pub struct ToggleRadioButton {
    /// Label text.
    text: String,

    /// Current checked state.
    checked: bool,

    /// Whether clicks are processed.
    enabled: bool,

    /// Signal emitted when the checked state changes.
    pub toggled: Signal<bool>,

    /// Signal emitted on every effective click.
    pub clicked: Signal<bool>,
}

impl ToggleRadioButton {
    /// Create an unchecked control with the specified label text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
            enabled: true,
            toggled: Signal::new(),
            clicked: Signal::new(),
        }
    }

    /// Get the label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the label text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Check if the control is currently checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.toggled.emit(checked);
        }
    }

    /// Set the checked state using builder pattern.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Check if clicks are processed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether clicks are processed.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Programmatically click the control, toggling its state.
    pub fn click(&mut self) {
        if !self.enabled {
            return;
        }
        let new_checked = !self.checked;
        self.set_checked(new_checked);
        self.clicked.emit(new_checked);
    }

    /// Handle a mouse click from the host.
    ///
    /// Only the primary button toggles; other buttons are ignored.
    pub fn mouse_clicked(&mut self, button: MouseButton) {
        if !button.is_primary() {
            return;
        }
        self.click();
    }
}

impl Default for ToggleRadioButton {
    fn default() -> Self {
        Self::new(String::new())
    }
}

static_assertions::assert_impl_all!(ToggleRadioButton: Send, Sync);
