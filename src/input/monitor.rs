//! Per-button monitors feeding the `Global/Keys` trigger group.
//!
//! Each monitored button carries its own [`ButtonState`] machine. On every
//! actual state change the monitor pushes `previousState`/`state`
//! parameters and fires the `Global/Keys/<buttonName>` trigger, so script
//! environments can react to key edges without polling. The registry is a
//! deduplicating pool: one monitor per button name, removed once the last
//! handle to it is released.

use std::cell::Cell;
use std::rc::Rc;

use log::{trace, warn};

use super::button::{ButtonState, InputButton};
use crate::error::TriggerError;
use crate::triggers::{TriggerGroupHandle, TriggerManager};

/// Monitors one button and fires its key trigger on state changes.
pub struct InputButtonMonitor {
    button: Rc<dyn InputButton>,
    state: Cell<ButtonState>,
    removed: Cell<bool>,
}

impl InputButtonMonitor {
    fn new(button: Rc<dyn InputButton>) -> Self {
        Self {
            button,
            state: Cell::new(ButtonState::Idle),
            removed: Cell::new(false),
        }
    }

    pub fn button_name(&self) -> &str {
        self.button.name()
    }

    pub fn state(&self) -> ButtonState {
        self.state.get()
    }

    fn is_removed(&self) -> bool {
        self.removed.get()
    }

    /// Poll the button and advance the state machine, firing the key
    /// trigger if the state actually changed. Returns whether dependent UI
    /// needs a refresh (a `Pressed` or `Released` edge).
    fn update(&self, keys: &TriggerGroupHandle) -> bool {
        let previous = self.state.get();
        let current = previous.next(self.button.is_pressed());
        self.state.set(current);
        if current == previous {
            return false;
        }
        let name = self.button.name();
        trace!("button '{name}': {} -> {}", previous.as_str(), current.as_str());
        let fired = keys
            .push_parameter(name, "previousState", previous.as_str())
            .and_then(|_| keys.push_parameter(name, "state", current.as_str()))
            .and_then(|_| keys.trigger(name));
        if let Err(err) = fired {
            warn!("key trigger for button '{name}' failed: {err}");
        }
        matches!(current, ButtonState::Pressed | ButtonState::Released)
    }
}

/// Handle to a pooled monitor. Dropping the last handle marks the monitor
/// for removal; the registry reaps it on its next update pass.
pub struct MonitorHandle {
    monitor: Rc<InputButtonMonitor>,
}

impl MonitorHandle {
    pub fn button_name(&self) -> &str {
        self.monitor.button_name()
    }

    pub fn state(&self) -> ButtonState {
        self.monitor.state()
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        // The registry's own reference plus this handle: last release.
        if Rc::strong_count(&self.monitor) <= 2 {
            self.monitor.removed.set(true);
        }
    }
}

/// Deduplicating pool of button monitors bound to `Global/Keys`.
pub struct ButtonMonitors {
    monitors: Vec<Rc<InputButtonMonitor>>,
    keys: TriggerGroupHandle,
    require_refresh: bool,
}

impl ButtonMonitors {
    /// Create the pool, allocating the `Global/Keys` trigger group.
    ///
    /// Fails if the group already exists or the `"Global"` namespace is
    /// gone (after [`TriggerManager::clear`]).
    pub fn new(manager: &mut TriggerManager) -> Result<Self, TriggerError> {
        let keys = manager.create_trigger_group("Global", "Keys")?;
        Ok(Self {
            monitors: Vec::new(),
            keys,
            require_refresh: true,
        })
    }

    /// Obtain a monitor for the button, reusing an existing one when the
    /// button is already monitored; otherwise registers a new key trigger
    /// named after the button.
    pub fn monitor(&mut self, button: Rc<dyn InputButton>) -> Result<MonitorHandle, TriggerError> {
        if let Some(existing) = self
            .monitors
            .iter()
            .find(|m| m.button_name() == button.name())
        {
            // The last handle may have been dropped since the previous
            // update pass; the new handle supersedes that release.
            existing.removed.set(false);
            return Ok(MonitorHandle {
                monitor: Rc::clone(existing),
            });
        }
        self.keys.add_trigger(button.name())?;
        let monitor = Rc::new(InputButtonMonitor::new(button));
        self.monitors.push(Rc::clone(&monitor));
        Ok(MonitorHandle { monitor })
    }

    /// Advance every live monitor and reap removed ones in one traversal.
    ///
    /// Reaped monitors unregister their key trigger. The refresh flag is
    /// recomputed from this pass: set if any button saw a `Pressed` or
    /// `Released` edge.
    pub fn update_monitors(&mut self) {
        let keys = &self.keys;
        let mut refresh = false;
        self.monitors.retain(|monitor| {
            if monitor.is_removed() {
                keys.remove_trigger(monitor.button_name());
                false
            } else {
                refresh |= monitor.update(keys);
                true
            }
        });
        self.require_refresh = refresh;
    }

    /// Whether a driving loop should re-poll dependent UI this tick.
    pub fn require_refresh(&self) -> bool {
        self.require_refresh
    }

    /// Number of live monitors in the pool.
    pub fn monitored_count(&self) -> usize {
        self.monitors.len()
    }
}
