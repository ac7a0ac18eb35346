//! Monitor-specific change detection and alerting.
//!
//! The monitor display polls the ready orders and must announce each
//! newly-ready order exactly once: one audio chime and one visual callout
//! naming the customer. [`ReadyNotifier`] owns the diff state and the mute
//! toggle; [`alert`] holds the chime data and the callout timing.
//!
//! Each monitor instance constructs its own notifier. Two monitors running
//! side by side each announce independently, which is expected.

pub mod alert;
pub mod notifier;

pub use alert::*;
pub use notifier::*;
