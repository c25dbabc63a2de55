//! Namespaced trigger registry.
//!
//! Overview
//! - `parameter` – type-erased parameter values and the per-fire bag
//! - `trigger` – a single named event slot and its callback registrations
//! - `group` – ordered, named collection of triggers within a namespace
//! - `manager` – two-level registry, group handles, and the delayed-trigger
//!   scheduler
//!
//! Producers obtain a handle from the [`TriggerManager`], push parameters,
//! and fire; all registered callback environments run synchronously on the
//! calling thread. Delayed fires are promoted by the manager's per-tick
//! [`update`](TriggerManager::update) pass.

pub mod group;
pub mod manager;
pub mod parameter;
pub mod trigger;

pub use group::TriggerGroup;
pub use manager::{TriggerGroupHandle, TriggerManager};
pub use parameter::{ParameterBag, ParameterValue};
pub use trigger::{Trigger, TriggerHandle};
