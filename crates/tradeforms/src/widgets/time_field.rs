//! Bounded 2-digit numeric sub-field for hour and minute entry.
//!
//! A [`TimeField`] models one of the two small inputs shown inside the
//! date-time picker popup. Every keystroke-driven write runs through a
//! correction pass that keeps the field a 2-character digit string that never
//! exceeds the field's maximum value:
//!
//! 1. Non-digit input reverts to the prior text.
//! 2. Empty input becomes `"00"`.
//! 3. A single digit is left-padded with `"0"`.
//! 4. A 2-digit value above the maximum drops the leading digit
//!    (`"99"` with max 23 becomes `"09"`).
//! 5. Longer input keeps a 2-digit window chosen by the caret position: at or
//!    near the start (caret <= 1) the first two characters survive and the
//!    caret advances past the dropped tail; otherwise the last two survive.
//!    The kept window is re-clamped by rule 4.
//!
//! The field starts blank and stays blank until the first write; a blank
//! field reports no value, which the picker uses to fall back to wall-clock
//! or previous time-of-day.

use tradeforms_core::Signal;
use tradeforms_core::logging::targets;

/// A self-correcting 2-digit numeric input with an upper bound.
///
/// Editability gates only the keystroke path ([`set_input`](Self::set_input));
/// programmatic writes via [`set_value`](Self::set_value) always apply, which
/// is how the picker forces `"00"` after time entry is disabled.
///
/// # Signals
///
/// - `text_changed(String)`: Emitted when the corrected text changes
pub struct TimeField {
    /// Corrected display text. Empty until the first write.
    text: String,

    /// Caret position within the text, in characters.
    caret: usize,

    /// Largest value the field accepts (23 for hours, 59 for minutes).
    max_value: u32,

    /// Whether keystroke-driven edits are applied.
    editable: bool,

    /// Signal emitted when the corrected text changes.
    pub text_changed: Signal<String>,
}

impl TimeField {
    /// Create a blank field accepting values up to `max_value`.
    pub fn new(max_value: u32) -> Self {
        Self {
            text: String::new(),
            caret: 0,
            max_value,
            editable: true,
            text_changed: Signal::new(),
        }
    }

    /// Get the current corrected text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the caret position.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Get the largest accepted value.
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Check whether the field has received no input yet.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the numeric value, or `None` while the field is blank.
    pub fn value(&self) -> Option<u32> {
        self.text.parse().ok()
    }

    /// Check whether keystroke-driven edits are applied.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Set whether keystroke-driven edits are applied.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Apply a keystroke-driven edit.
    ///
    /// `text` is the raw field content after the edit and `caret` the caret
    /// position after it. The corrected text and caret replace both. Ignored
    /// while the field is not editable.
    pub fn set_input(&mut self, text: &str, caret: usize) {
        if !self.editable {
            return;
        }
        self.apply(text, caret);
    }

    /// Write a value programmatically.
    ///
    /// The value feeds through the same correction pass as typed input, so
    /// `5` displays as `"05"` and out-of-range values are clamped. Applies
    /// regardless of editability.
    pub fn set_value(&mut self, value: u32) {
        let text = value.to_string();
        let caret = text.len();
        self.apply(&text, caret);
    }

    fn apply(&mut self, text: &str, caret: usize) {
        let (corrected, caret) = correct(&self.text, text, caret, self.max_value);
        self.caret = caret;
        if corrected != self.text {
            self.text = corrected;
            self.text_changed.emit(self.text.clone());
        }
    }
}

/// Run the correction rules against an edited field content.
///
/// Returns the corrected text and caret position. `prior` is the field
/// content before the edit, used when the input is rejected outright.
fn correct(prior: &str, input: &str, caret: usize, max_value: u32) -> (String, usize) {
    if !input.chars().all(|c| c.is_ascii_digit()) {
        tracing::trace!(target: targets::TIME_FIELD, input, "non-digit input rejected");
        return (prior.to_string(), caret.min(prior.len()));
    }

    match input.len() {
        0 => ("00".to_string(), caret.min(2)),
        1 => (format!("0{}", input), (caret + 1).min(2)),
        2 => (clamp_window(input, max_value), caret.min(2)),
        _ => {
            if caret <= 1 {
                // Keep the leading window; the caret advances past the
                // character dropped off the tail.
                (clamp_window(&input[..2], max_value), (caret + 1).min(2))
            } else {
                (clamp_window(&input[input.len() - 2..], max_value), 2)
            }
        }
    }
}

/// Clamp a 2-digit window against the maximum by dropping the leading digit.
fn clamp_window(window: &str, max_value: u32) -> String {
    match window.parse::<u32>() {
        Ok(value) if value > max_value => format!("0{}", &window[1..]),
        _ => window.to_string(),
    }
}

static_assertions::assert_impl_all!(TimeField: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_field_starts_blank() {
        let field = TimeField::new(23);
        assert!(field.is_blank());
        assert_eq!(field.value(), None);
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_non_digit_reverts() {
        let mut field = TimeField::new(23);
        field.set_input("12", 2);
        field.set_input("1a", 2);
        assert_eq!(field.text(), "12");
        field.set_input(" 2", 2);
        assert_eq!(field.text(), "12");
    }

    #[test]
    fn test_empty_becomes_zero() {
        let mut field = TimeField::new(59);
        field.set_input("", 0);
        assert_eq!(field.text(), "00");
        assert_eq!(field.value(), Some(0));
    }

    #[test]
    fn test_single_digit_padded() {
        let mut field = TimeField::new(23);
        field.set_input("5", 1);
        assert_eq!(field.text(), "05");
        assert_eq!(field.value(), Some(5));
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn test_two_digits_clamped_to_max() {
        let mut field = TimeField::new(23);
        field.set_input("99", 2);
        assert_eq!(field.text(), "09");

        let mut minutes = TimeField::new(59);
        minutes.set_input("73", 2);
        assert_eq!(minutes.text(), "03");
    }

    #[test]
    fn test_two_digits_within_max_kept() {
        let mut field = TimeField::new(23);
        field.set_input("23", 2);
        assert_eq!(field.text(), "23");
        assert_eq!(field.value(), Some(23));
    }

    #[test]
    fn test_third_digit_at_start_keeps_leading_window() {
        // Field "23", caret at 0, insert "5": candidate "523", caret 1.
        // Leading window "52" survives, clamps to "02", caret advances to 2.
        let mut field = TimeField::new(23);
        field.set_input("23", 2);
        field.set_input("523", 1);
        assert_eq!(field.text(), "02");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn test_third_digit_at_end_keeps_trailing_window() {
        // Field "12", caret at end, type "5": candidate "125", caret 3.
        // Trailing window "25" survives with max 59.
        let mut field = TimeField::new(59);
        field.set_input("12", 2);
        field.set_input("125", 3);
        assert_eq!(field.text(), "25");
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn test_trailing_window_reclamps() {
        let mut field = TimeField::new(23);
        field.set_input("12", 2);
        field.set_input("129", 3);
        // "29" > 23, drop the leading digit.
        assert_eq!(field.text(), "09");
    }

    #[test]
    fn test_set_value_pads_and_applies_when_not_editable() {
        let mut field = TimeField::new(23);
        field.set_editable(false);
        field.set_input("12", 2);
        assert!(field.is_blank()); // keystroke path gated

        field.set_value(7);
        assert_eq!(field.text(), "07"); // programmatic path applies
    }

    #[test]
    fn test_text_changed_signal_fires_on_real_change_only() {
        let mut field = TimeField::new(59);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        field.text_changed.connect(move |text| {
            seen_clone.lock().push(text.clone());
        });

        field.set_input("30", 2);
        field.set_input("30", 1); // same corrected text, caret move only
        field.set_value(30);

        assert_eq!(*seen.lock(), vec!["30".to_string()]);
    }
}
