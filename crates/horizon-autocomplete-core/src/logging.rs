//! Logging facilities for Horizon Autocomplete.
//!
//! Horizon Autocomplete uses the `tracing` crate for instrumentation. To see
//! logs, install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_autocomplete=debug")
//!     .init();
//! ```
//!
//! The constants in [`targets`] name every target the workspace logs under, so
//! filters can be written against them.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_autocomplete_core";
    /// Timer system target.
    pub const TIMER: &str = "horizon_autocomplete_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_autocomplete_core::signal";
    /// Controller lifecycle (mount, unmount, selection).
    pub const CONTROLLER: &str = "horizon_autocomplete::controller";
    /// Lookup dispatch and completion delivery.
    pub const REQUEST: &str = "horizon_autocomplete::request";
    /// Row rendering.
    pub const RENDER: &str = "horizon_autocomplete::render";
    /// HTTP client.
    pub const HTTP: &str = "horizon_autocomplete_net::http";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_nested_under_crate_names() {
        for target in [targets::TIMER, targets::SIGNAL] {
            assert!(target.starts_with(targets::CORE));
        }
        for target in [targets::CONTROLLER, targets::REQUEST, targets::RENDER] {
            assert!(target.starts_with("horizon_autocomplete::"));
        }
    }
}
