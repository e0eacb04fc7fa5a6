//! Core plumbing for multicombo.
//!
//! This crate holds the pieces of the control that know nothing about
//! checkable items or popups:
//!
//! - **Signals**: type-safe observer notifications ([`Signal`])
//! - **Logging**: `tracing` target names ([`logging::targets`])
//!
//! # Signal Example
//!
//! ```
//! use multicombo_core::Signal;
//!
//! let selection_changed = Signal::<usize>::new();
//! let conn_id = selection_changed.connect(|count| {
//!     println!("{count} items selected");
//! });
//!
//! selection_changed.emit(2);
//! selection_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use signal::{ConnectionId, Signal};
