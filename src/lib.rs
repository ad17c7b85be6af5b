//! Resource-monitor core for a tray-style overlay widget.
//!
//! The crate splits into a frontend-free core (sampling, rate derivation,
//! the visibility/lock/drag state machine, position persistence, and the
//! [`controller::TrayController`] that ties them to a [`shell::Shell`]) and
//! a terminal surface under [`ui`] that implements that shell.

pub mod controller;
pub mod event;
pub mod format;
pub mod geom;
pub mod logging;
pub mod metrics;
pub mod overlay;
pub mod position;
pub mod shell;
pub mod ui;
