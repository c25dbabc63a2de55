//! Triggerkit library.
//!
//! A namespaced trigger/event dispatch core for scripted game engines.
//! Engine subsystems, scripted game objects, and input devices register
//! named triggers, attach parameters, schedule delayed firing, and invoke
//! registered callback environments synchronously on one update thread.
//!
//! # Module overview
//!
//! - [`triggers`] – triggers, trigger groups, and the owning [`TriggerManager`](triggers::TriggerManager)
//! - [`script`] – the opaque callback-environment seam and owner liveness tokens
//! - [`input`] – button state machines feeding the `Global/Keys` trigger group
//! - [`time`] – the monotonic chronometer driving delayed-trigger scheduling
//! - [`error`] – the [`TriggerError`](error::TriggerError) taxonomy
//!
//! # Update loop
//!
//! The host drives the core once per tick:
//!
//! 1. Poll inputs and call [`ButtonMonitors::update_monitors`](input::ButtonMonitors::update_monitors)
//! 2. Run gameplay logic that pushes parameters and fires triggers
//! 3. Call [`TriggerManager::update`](triggers::TriggerManager::update) to stamp and
//!    promote delayed triggers and reap released group handles

pub mod error;
pub mod input;
pub mod script;
pub mod time;
pub mod triggers;
