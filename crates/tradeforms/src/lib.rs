//! tradeforms - reusable form-input controllers for trading-journal desktop apps.
//!
//! This is the main umbrella crate. It holds the widget controllers (date-time
//! picker, file chooser, toggleable radio button) and re-exports the reactive
//! core they are built on.
//!
//! The controllers are toolkit-independent: the host UI layer forwards input
//! events ("text committed", "calendar day clicked", "focus lost") to
//! controller entry points and renders the state it observes back through
//! signals and accessors.
//!
//! # Example
//!
//! ```
//! use tradeforms::widgets::DateTimePicker;
//!
//! let mut picker = DateTimePicker::new();
//! picker.date_time_changed.connect(|value| {
//!     println!("Entry time is now {:?}", value);
//! });
//! picker.set_editor_text("2024-03-01 12:15");
//! picker.commit_editor();
//! ```

pub use tradeforms_core::*;

pub mod prelude;
pub mod widgets;
