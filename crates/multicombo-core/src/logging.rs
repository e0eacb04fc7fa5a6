//! Logging facilities for multicombo.
//!
//! multicombo uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the host application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("multicombo=debug")
//!     .init();
//! ```
//!
//! The constants in [`targets`] can be used in `EnvFilter` directives to
//! narrow the output to a single subsystem.

/// Target names for log filtering.
pub mod targets {
    /// Selection model target (toggles, ledger recounts).
    pub const MODEL: &str = "multicombo::model";
    /// Popup visibility target (open, close, suppressed close).
    pub const POPUP: &str = "multicombo::popup";
    /// Render dispatch target.
    pub const RENDER: &str = "multicombo::render";
    /// Configuration loading target.
    pub const CONFIG: &str = "multicombo::config";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "multicombo_core::signal";
}

/// Span names used for tracing.
pub mod span_names {
    /// A single commit event (mouse click or keyboard activation).
    pub const COMMIT: &str = "multicombo::commit";
    /// A paint pass over the summary row and visible rows.
    pub const PAINT: &str = "multicombo::paint";
}
