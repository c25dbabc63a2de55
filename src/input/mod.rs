//! Input button monitoring.
//!
//! Overview
//! - `button` – the [`InputButton`] device contract and [`ButtonState`] machine
//! - `monitor` – the deduplicating [`ButtonMonitors`] pool firing
//!   `Global/Keys` triggers on state changes

pub mod button;
pub mod monitor;

pub use button::{ButtonState, InputButton};
pub use monitor::{ButtonMonitors, InputButtonMonitor, MonitorHandle};
