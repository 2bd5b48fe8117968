//! Core systems for tradeforms.
//!
//! This crate provides the reactive foundation shared by the tradeforms
//! widget controllers:
//!
//! - **Signal/Slot System**: Type-safe notification between controllers and
//!   the host UI layer
//! - **Property System**: Change-detecting value cells with idempotent writes
//! - **Logging targets**: `tracing` target names for per-subsystem filtering
//!
//! Everything here is synchronous: widget controllers mutate their state
//! inside UI-event callbacks and slots run immediately on the emitting
//! thread. There is no event loop and no queued delivery.
//!
//! # Signal/Slot Example
//!
//! ```
//! use tradeforms_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use tradeforms_core::{Property, Signal};
//!
//! // A reactive counter with change notification
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn new() -> Self {
//!         Self {
//!             value: Property::new(0),
//!             value_changed: Signal::new(),
//!         }
//!     }
//!
//!     fn increment(&self) {
//!         let new_value = self.value.get() + 1;
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
