//! # Services
//!
//! Outbound seams of the views: toast notices and routing. Both are
//! fire-and-forget traits so the views can be driven by the shell, a UI
//! shell, or a test recorder.

mod navigator;
mod notifier;

pub use navigator::{Navigator, Route, RouteLog};
pub use notifier::{Notice, NoticeLog, Notifier, Severity};
