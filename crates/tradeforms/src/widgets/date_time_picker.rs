//! Combined date + time entry controller.
//!
//! [`DateTimePicker`] reconciles three input surfaces into one canonical
//! date-time value:
//!
//! - the editor text field (`YYYY-MM-DD HH:MM`, 24-hour),
//! - the calendar popup's day selection,
//! - the two numeric sub-fields for hour and minute shown inside the popup.
//!
//! Two flags shape the behavior. `allow_null` decides whether the value may
//! be blanked: with nulling disallowed, a cleared value silently snaps back
//! to the previous one. `allow_time` decides whether time entry is live:
//! while disabled, the sub-fields are forced to `"00"` and the stored
//! time-of-day is exactly midnight.
//!
//! The host UI layer forwards events to the entry points
//! ([`commit_editor`](DateTimePicker::commit_editor),
//! [`focus_lost`](DateTimePicker::focus_lost),
//! [`popup_about_to_show`](DateTimePicker::popup_about_to_show),
//! [`pick_date`](DateTimePicker::pick_date),
//! [`day_cell_clicked`](DateTimePicker::day_cell_clicked)) and places the
//! exposed sub-fields and calendar model into whatever popup it renders.
//!
//! # Example
//!
//! ```
//! use tradeforms::widgets::DateTimePicker;
//!
//! let mut picker = DateTimePicker::new();
//! picker.set_editor_text("2024-03-01 12:15");
//! picker.commit_editor();
//! assert!(picker.date_time().is_some());
//! assert_eq!(picker.editor_text(), "2024-03-01 12:15");
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use tradeforms_core::logging::targets;
use tradeforms_core::{Property, Signal};

use super::calendar::CalendarSelection;
use super::mouse::MouseButton;
use super::time_field::TimeField;

/// The fixed editor pattern: `YYYY-MM-DD HH:MM`, 24-hour clock.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A controller for combined date and time entry.
///
/// Owns the canonical (nullable) date-time value, the `allow_null` /
/// `allow_time` mode flags, the editor text, the two numeric sub-fields and
/// the calendar selection model. All mutation funnels through a single
/// reconciliation pass, so every entry point leaves the surfaces consistent:
/// the calendar mirrors the value's date and the editor shows the formatted
/// value.
///
/// # Signals
///
/// - `date_time_changed(Option<NaiveDateTime>)`: Emitted when the canonical value changes
/// - `allow_null_changed(bool)`: Emitted when the nulling flag changes
/// - `allow_time_changed(bool)`: Emitted when the time-entry flag changes
/// - `editor_text_changed(String)`: Emitted when the editor text changes
pub struct DateTimePicker {
    /// Canonical value. `None` when the field is blank.
    date_time: Property<Option<NaiveDateTime>>,

    /// Whether the value may be blanked.
    allow_null: Property<bool>,

    /// Whether time entry is live.
    allow_time: Property<bool>,

    /// Current editor text (what the host text field displays).
    editor_text: Property<String>,

    /// Hour sub-field (0-23).
    hour_field: TimeField,

    /// Minute sub-field (0-59).
    minute_field: TimeField,

    /// Selection model the calendar popup renders.
    calendar: CalendarSelection,

    /// Signal emitted when the canonical value changes.
    pub date_time_changed: Signal<Option<NaiveDateTime>>,

    /// Signal emitted when the nulling flag changes.
    pub allow_null_changed: Signal<bool>,

    /// Signal emitted when the time-entry flag changes.
    pub allow_time_changed: Signal<bool>,

    /// Signal emitted when the editor text changes.
    pub editor_text_changed: Signal<String>,
}

impl DateTimePicker {
    /// Create a blank picker with nulling and time entry enabled.
    pub fn new() -> Self {
        Self {
            date_time: Property::new(None),
            allow_null: Property::new(true),
            allow_time: Property::new(true),
            editor_text: Property::new(String::new()),
            hour_field: TimeField::new(23),
            minute_field: TimeField::new(59),
            calendar: CalendarSelection::new(),
            date_time_changed: Signal::new(),
            allow_null_changed: Signal::new(),
            allow_time_changed: Signal::new(),
            editor_text_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Canonical Value
    // =========================================================================

    /// Get the canonical date-time value.
    pub fn date_time(&self) -> Option<NaiveDateTime> {
        self.date_time.get()
    }

    /// Set the canonical date-time value.
    ///
    /// Clearing is rejected while `allow_null` is false: the previous value
    /// is kept. The time-of-day is forced to midnight while `allow_time` is
    /// false. The calendar selection and editor text follow the result.
    pub fn set_date_time(&mut self, value: Option<NaiveDateTime>) {
        self.reconcile(value);
    }

    /// Set the canonical value using builder pattern.
    pub fn with_date_time(mut self, value: NaiveDateTime) -> Self {
        self.reconcile(Some(value));
        self
    }

    // =========================================================================
    // Mode Flags
    // =========================================================================

    /// Check whether the value may be blanked.
    pub fn allow_null(&self) -> bool {
        self.allow_null.get()
    }

    /// Set whether the value may be blanked.
    pub fn set_allow_null(&mut self, allow: bool) {
        if self.allow_null.set(allow) {
            self.allow_null_changed.emit(allow);
        }
    }

    /// Set the nulling flag using builder pattern.
    pub fn with_allow_null(mut self, allow: bool) -> Self {
        self.allow_null.set(allow);
        self
    }

    /// Check whether time entry is live.
    pub fn allow_time(&self) -> bool {
        self.allow_time.get()
    }

    /// Set whether time entry is live.
    ///
    /// Disabling forces both sub-fields to `"00"`, makes them non-editable
    /// and zeroes the stored time-of-day immediately. Re-enabling makes the
    /// sub-fields editable again without touching the stored zeros.
    pub fn set_allow_time(&mut self, allow: bool) {
        if !self.allow_time.set(allow) {
            return;
        }
        self.hour_field.set_editable(allow);
        self.minute_field.set_editable(allow);
        if !allow {
            self.hour_field.set_value(0);
            self.minute_field.set_value(0);
            let current = self.date_time.get();
            self.reconcile(current);
        }
        self.allow_time_changed.emit(allow);
    }

    /// Set the time-entry flag using builder pattern.
    pub fn with_allow_time(mut self, allow: bool) -> Self {
        self.set_allow_time(allow);
        self
    }

    // =========================================================================
    // Composition Points
    // =========================================================================

    /// Get the hour sub-field.
    pub fn hour_field(&self) -> &TimeField {
        &self.hour_field
    }

    /// Get the hour sub-field mutably (host keystroke forwarding).
    pub fn hour_field_mut(&mut self) -> &mut TimeField {
        &mut self.hour_field
    }

    /// Get the minute sub-field.
    pub fn minute_field(&self) -> &TimeField {
        &self.minute_field
    }

    /// Get the minute sub-field mutably (host keystroke forwarding).
    pub fn minute_field_mut(&mut self) -> &mut TimeField {
        &mut self.minute_field
    }

    /// Get the calendar selection model.
    pub fn calendar(&self) -> &CalendarSelection {
        &self.calendar
    }

    /// Get the calendar selection model mutably (host page navigation).
    pub fn calendar_mut(&mut self) -> &mut CalendarSelection {
        &mut self.calendar
    }

    // =========================================================================
    // Editor Text
    // =========================================================================

    /// Get the current editor text.
    pub fn editor_text(&self) -> String {
        self.editor_text.get()
    }

    /// Replace the editor text without committing it.
    ///
    /// The host calls this as the user types; the text is parsed only by the
    /// next commit pass.
    pub fn set_editor_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.editor_text.set(text.clone()) {
            self.editor_text_changed.emit(text);
        }
    }

    /// Format the canonical value with the fixed pattern.
    ///
    /// A blank value formats as the empty string. While `allow_time` is
    /// false the time portion is always `00:00`.
    pub fn display_text(&self) -> String {
        match self.date_time.get() {
            None => String::new(),
            Some(value) => {
                let shown = if self.allow_time.get() {
                    value
                } else {
                    value.date().and_time(NaiveTime::MIN)
                };
                shown.format(DATE_TIME_FORMAT).to_string()
            }
        }
    }

    // =========================================================================
    // Commit Passes
    // =========================================================================

    /// Commit a text representation into the canonical value.
    ///
    /// Blank text clears the value when nulling is allowed. Unparseable text
    /// never surfaces an error: the previous value is re-committed, or
    /// nothing changes when there is none. A successful parse pushes the
    /// hour and minute into the sub-fields while time entry is live.
    ///
    /// Returns the date projection of the resulting value.
    pub fn commit_text(&mut self, text: &str) -> Option<NaiveDate> {
        if self.allow_null.get() && text.trim().is_empty() {
            self.reconcile(None);
            return None;
        }

        let value = match NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::debug!(
                    target: targets::PICKER,
                    text,
                    "unparseable input, falling back to previous value"
                );
                match self.date_time.get() {
                    Some(previous) => previous,
                    None => return None,
                }
            }
        };

        if self.allow_time.get() {
            self.hour_field.set_value(value.hour());
            self.minute_field.set_value(value.minute());
        }

        self.reconcile(Some(value));
        self.date_time.get().map(|value| value.date())
    }

    /// Commit the current editor text.
    pub fn commit_editor(&mut self) -> Option<NaiveDate> {
        let text = self.editor_text.get();
        self.commit_text(&text)
    }

    /// Handle the editor losing input focus: commit the pending text.
    pub fn focus_lost(&mut self) {
        self.commit_editor();
    }

    /// Handle the calendar popup about to open.
    ///
    /// A blank picker with live time entry primes the sub-fields from the
    /// wall clock, so a freshly opened popup shows "now" instead of 00:00.
    /// Pending editor text is committed before the popup renders.
    pub fn popup_about_to_show(&mut self) {
        if self.date_time.get().is_none() && self.allow_time.get() {
            let now = Local::now().time();
            self.hour_field.set_value(now.hour());
            self.minute_field.set_value(now.minute());
        }
        self.commit_editor();
    }

    // =========================================================================
    // Calendar Merge
    // =========================================================================

    /// Handle a day selection from the calendar popup.
    ///
    /// A cleared selection blanks the value only while nulling is allowed;
    /// otherwise the selection snaps back to the current value's date. A
    /// picked day merges with the sub-field time: blank sub-fields fall back
    /// to the wall clock when no value exists yet, or to the previous
    /// value's time-of-day when one does.
    pub fn pick_date(&mut self, date: Option<NaiveDate>) {
        match date {
            None => {
                if self.allow_null.get() {
                    self.reconcile(None);
                } else {
                    // Calendar is not authoritative for clearing; re-project.
                    let projection = self.date_time.get().map(|value| value.date());
                    self.calendar.set_selected_date(projection);
                }
            }
            Some(day) => {
                self.calendar.set_selected_date(Some(day));
                let merged = match self.date_time.get() {
                    None => day.and_time(self.field_time(Local::now().time())),
                    Some(previous) => day.and_time(self.field_time(previous.time())),
                };
                self.reconcile(Some(merged));
            }
        }
    }

    /// Merge the sub-field time into the current value.
    ///
    /// No-op while the value is blank. Used after a primary click on a day
    /// cell, and by hosts that re-apply the popup time when the closed
    /// control is clicked.
    pub fn apply_field_time(&mut self) {
        let Some(current) = self.date_time.get() else {
            return;
        };
        let time = self.field_time(current.time());
        self.reconcile(Some(current.date().and_time(time)));
    }

    /// Handle a click on a calendar day cell.
    ///
    /// Only the primary button merges; other buttons are ignored.
    pub fn day_cell_clicked(&mut self, button: MouseButton) {
        if !button.is_primary() {
            return;
        }
        self.apply_field_time();
    }

    // =========================================================================
    // Reconciliation
    // =========================================================================

    /// The single reconciliation pass behind every entry point.
    ///
    /// Applies the nulling and time rules, writes the value with idempotent
    /// change detection, projects the date onto the calendar and rewrites
    /// the editor text. Writing the current value back is a complete no-op,
    /// which keeps host-wired listener cycles finite.
    fn reconcile(&mut self, value: Option<NaiveDateTime>) {
        let old = self.date_time.get();
        let mut new = value;

        if old.is_some() && new.is_none() && !self.allow_null.get() {
            tracing::trace!(target: targets::PICKER, "clear rejected, keeping previous value");
            new = old;
        }

        if !self.allow_time.get() {
            new = new.map(|value| value.date().and_time(NaiveTime::MIN));
        }

        if self.date_time.set(new) {
            tracing::trace!(target: targets::PICKER, value = ?new, "canonical value changed");
            self.date_time_changed.emit(new);
        }

        self.calendar
            .set_selected_date(new.map(|value| value.date()));
        self.refresh_editor_text();
    }

    /// Build a time-of-day from the sub-fields, falling back per component.
    fn field_time(&self, fallback: NaiveTime) -> NaiveTime {
        let hour = self.hour_field.value().unwrap_or_else(|| fallback.hour());
        let minute = self
            .minute_field
            .value()
            .unwrap_or_else(|| fallback.minute());
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(fallback)
    }

    fn refresh_editor_text(&mut self) {
        let text = self.display_text();
        if self.editor_text.set(text.clone()) {
            self.editor_text_changed.emit(text);
        }
    }
}

impl Default for DateTimePicker {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(DateTimePicker: Send, Sync);
