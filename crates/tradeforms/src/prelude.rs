//! Prelude module for tradeforms.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use tradeforms::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot and property system (`Signal`, `Property`)
//! - The date-time picker controller and its parts
//! - The file chooser control and its dialog collaborator types
//! - The toggleable radio button

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use tradeforms_core::property::{Property, ReadOnlyProperty};
pub use tradeforms_core::signal::{ConnectionId, Signal};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widgets::{
    CalendarSelection, DateTimePicker, FileChooserControl, FileDialogMode, FileDialogProvider,
    FileDialogRequest, FileFilter, MouseButton, TimeField, ToggleRadioButton,
};
