//! Date-only selection model for the calendar popup.
//!
//! [`CalendarSelection`] holds what the popup renders: the selected day (if
//! any) and the displayed month page. The date-time picker projects its
//! canonical value into this model; the host forwards day clicks back through
//! the picker's entry points.

use chrono::{Datelike, Local, NaiveDate};

use tradeforms_core::Signal;

/// The selection state behind a calendar popup.
///
/// # Signals
///
/// - `selection_changed(Option<NaiveDate>)`: Emitted when the selected day changes
/// - `page_changed((i32, u32))`: Emitted when the displayed (year, month) turns
pub struct CalendarSelection {
    /// Currently selected day, if any.
    selected: Option<NaiveDate>,

    /// Displayed (year, month) page.
    displayed: (i32, u32),

    /// Signal emitted when the selected day changes.
    pub selection_changed: Signal<Option<NaiveDate>>,

    /// Signal emitted when the displayed page turns.
    pub page_changed: Signal<(i32, u32)>,
}

impl CalendarSelection {
    /// Create an empty selection showing the current month.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            selected: None,
            displayed: (today.year(), today.month()),
            selection_changed: Signal::new(),
            page_changed: Signal::new(),
        }
    }

    /// Get the currently selected day.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Set the selected day.
    ///
    /// Selecting a day turns the page to its month. Setting the current
    /// selection again is a no-op and emits nothing.
    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        if self.selected == date {
            return;
        }
        self.selected = date;
        if let Some(day) = date {
            self.show_date(day);
        }
        self.selection_changed.emit(date);
    }

    /// Set the selected day using builder pattern.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.selected = Some(date);
        self.displayed = (date.year(), date.month());
        self
    }

    /// Get the displayed (year, month) page.
    pub fn displayed_year_month(&self) -> (i32, u32) {
        self.displayed
    }

    /// Turn the page to the month containing `date`.
    pub fn show_date(&mut self, date: NaiveDate) {
        self.set_page(date.year(), date.month());
    }

    /// Turn the page to the current month.
    pub fn show_today(&mut self) {
        self.show_date(Local::now().date_naive());
    }

    /// Turn the page one month back.
    pub fn show_previous_month(&mut self) {
        let (year, month) = self.displayed;
        if month == 1 {
            self.set_page(year - 1, 12);
        } else {
            self.set_page(year, month - 1);
        }
    }

    /// Turn the page one month forward.
    pub fn show_next_month(&mut self) {
        let (year, month) = self.displayed;
        if month == 12 {
            self.set_page(year + 1, 1);
        } else {
            self.set_page(year, month + 1);
        }
    }

    fn set_page(&mut self, year: i32, month: u32) {
        if self.displayed != (year, month) {
            self.displayed = (year, month);
            self.page_changed.emit(self.displayed);
        }
    }
}

impl Default for CalendarSelection {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(CalendarSelection: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_selection_starts_empty_on_current_month() {
        let calendar = CalendarSelection::new();
        let today = Local::now().date_naive();
        assert_eq!(calendar.selected_date(), None);
        assert_eq!(
            calendar.displayed_year_month(),
            (today.year(), today.month())
        );
    }

    #[test]
    fn test_selecting_turns_page_and_notifies() {
        let mut calendar = CalendarSelection::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        calendar.selection_changed.connect(move |date| {
            seen_clone.lock().push(*date);
        });

        calendar.set_selected_date(Some(day(2024, 3, 1)));
        assert_eq!(calendar.displayed_year_month(), (2024, 3));

        // Idempotent write: no second notification
        calendar.set_selected_date(Some(day(2024, 3, 1)));
        assert_eq!(*seen.lock(), vec![Some(day(2024, 3, 1))]);
    }

    #[test]
    fn test_clearing_selection_keeps_page() {
        let mut calendar = CalendarSelection::new().with_date(day(2023, 11, 20));
        calendar.set_selected_date(None);
        assert_eq!(calendar.selected_date(), None);
        assert_eq!(calendar.displayed_year_month(), (2023, 11));
    }

    #[test]
    fn test_month_paging_wraps_years() {
        let mut calendar = CalendarSelection::new().with_date(day(2024, 1, 15));
        calendar.show_previous_month();
        assert_eq!(calendar.displayed_year_month(), (2023, 12));
        calendar.show_next_month();
        assert_eq!(calendar.displayed_year_month(), (2024, 1));
        calendar.show_next_month();
        assert_eq!(calendar.displayed_year_month(), (2024, 2));
    }

    #[test]
    fn test_page_changed_signal() {
        let mut calendar = CalendarSelection::new().with_date(day(2024, 6, 1));
        let pages = Arc::new(Mutex::new(Vec::new()));

        let pages_clone = pages.clone();
        calendar.page_changed.connect(move |page| {
            pages_clone.lock().push(*page);
        });

        calendar.show_next_month();
        calendar.show_date(day(2024, 7, 9)); // same page, no emit
        calendar.show_previous_month();

        assert_eq!(*pages.lock(), vec![(2024, 7), (2024, 6)]);
    }
}
