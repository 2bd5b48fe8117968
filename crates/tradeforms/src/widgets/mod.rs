//! Form-input widget controllers.
//!
//! This module provides the journal's input controls:
//!
//! - [`DateTimePicker`]: Combined date + time entry with calendar popup merge
//! - [`TimeField`]: Self-correcting 2-digit bounded numeric sub-field
//! - [`CalendarSelection`]: Date-only selection model rendered by the popup
//! - [`FileChooserControl`]: File-path entry with a pick-file dialog collaborator
//! - [`ToggleRadioButton`]: Radio-look control that deselects on second click

mod calendar;
mod date_time_picker;
mod file_chooser;
mod mouse;
mod time_field;
mod toggle_button;

pub use calendar::CalendarSelection;
pub use date_time_picker::{DATE_TIME_FORMAT, DateTimePicker};
pub use file_chooser::{
    FileChooserControl, FileDialogMode, FileDialogProvider, FileDialogRequest, FileFilter,
    FilterSpecError,
};
pub use mouse::MouseButton;
pub use time_field::TimeField;
pub use toggle_button::ToggleRadioButton;
