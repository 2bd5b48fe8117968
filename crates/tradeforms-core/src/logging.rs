//! Logging facilities for tradeforms.
//!
//! tradeforms uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! All framework events are emitted under the targets in [`targets`], so a
//! directive such as `tradeforms=debug,tradeforms_core::signal=off` narrows
//! the output to a single subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "tradeforms_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tradeforms_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "tradeforms_core::property";
    /// Date-time picker controller target.
    pub const PICKER: &str = "tradeforms::picker";
    /// Numeric sub-field target.
    pub const TIME_FIELD: &str = "tradeforms::time_field";
    /// File chooser control target.
    pub const FILE_CHOOSER: &str = "tradeforms::file_chooser";
}
