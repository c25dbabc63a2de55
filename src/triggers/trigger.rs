//! A single named event slot and its callback registrations.
//!
//! Triggers are owned by their [`TriggerGroup`](super::TriggerGroup) and
//! shared through reference-counted cells; consumers only ever see the weak
//! [`TriggerHandle`]. Firing snapshots the registration list and takes the
//! parameter bag under a short borrow before invoking any script code, so a
//! callback may freely register, unregister, or re-fire during the pass
//! without invalidating the iteration.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{trace, warn};

use super::parameter::{ParameterBag, ParameterValue};
use crate::script::{CallbackEnvironment, EnvironmentId, Liveness};

pub(crate) type TriggerCell = Rc<RefCell<Trigger>>;

/// One registered interest: who wants which callback run, and whether the
/// owner is still alive when the trigger fires.
#[derive(Clone)]
struct CallbackRegistration {
    owner: String,
    environment: Rc<dyn CallbackEnvironment>,
    callback: String,
    liveness: Liveness,
}

/// A named, parameterized event slot invoked synchronously.
pub struct Trigger {
    name: String,
    enabled: bool,
    parameters: ParameterBag,
    registrations: Vec<CallbackRegistration>,
}

impl Trigger {
    /// Create an enabled trigger with no parameters or registrations.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            parameters: ParameterBag::new(),
            registrations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Allow fire requests to reach registered callbacks again.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Make fire requests silent no-ops until re-enabled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Store or overwrite a named parameter for the next fire.
    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        self.parameters.set(key, value);
    }

    /// Record interest from `environment`, replacing any prior registration
    /// from the same environment identity.
    pub fn register_callback(
        &mut self,
        owner: impl Into<String>,
        environment: Rc<dyn CallbackEnvironment>,
        callback: impl Into<String>,
        liveness: Liveness,
    ) {
        let registration = CallbackRegistration {
            owner: owner.into(),
            environment,
            callback: callback.into(),
            liveness,
        };
        let env_id = registration.environment.env_id();
        if let Some(existing) = self
            .registrations
            .iter_mut()
            .find(|r| r.environment.env_id() == env_id)
        {
            trace!(
                "replacing callback registration of '{}' on trigger '{}'",
                existing.owner, self.name
            );
            *existing = registration;
        } else {
            self.registrations.push(registration);
        }
    }

    /// Drop the registration from the given environment. Idempotent: absent
    /// registrations are a silent no-op, so teardown races are harmless.
    pub fn unregister_callback(&mut self, env_id: EnvironmentId) {
        self.registrations.retain(|r| r.environment.env_id() != env_id);
    }

    /// Number of currently registered callbacks.
    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }
}

/// Fire the trigger behind `cell`.
///
/// Invokes every live registration in registration order with the
/// parameters set since the previous fire, then leaves the bag empty.
/// Callback errors are logged and never abort the pass. Disabled triggers
/// swallow the request silently.
pub(crate) fn fire(cell: &TriggerCell) {
    let (name, registrations, parameters) = {
        let mut trigger = cell.borrow_mut();
        if !trigger.enabled {
            trace!("trigger '{}' disabled, swallowing fire request", trigger.name);
            return;
        }
        (
            trigger.name.clone(),
            trigger.registrations.clone(),
            std::mem::take(&mut trigger.parameters),
        )
    };
    trace!(
        "firing trigger '{}' with {} registration(s)",
        name,
        registrations.len()
    );
    for registration in registrations {
        if !registration.liveness.is_alive() {
            trace!(
                "skipping dead owner '{}' on trigger '{}'",
                registration.owner, name
            );
            continue;
        }
        if let Err(err) = registration
            .environment
            .invoke(&registration.callback, &parameters)
        {
            warn!(
                "owner '{}' callback failed on trigger '{}': {}",
                registration.owner, name, err
            );
        }
    }
}

/// Non-owning handle to a trigger.
///
/// Stays usable while the owning group exists; once the group is destroyed
/// every operation degrades to a logged no-op, mirroring the teardown
/// exemption of the registry: stale handles are never an error.
#[derive(Clone, Debug)]
pub struct TriggerHandle {
    inner: Weak<RefCell<Trigger>>,
}

impl TriggerHandle {
    pub(crate) fn new(inner: Weak<RefCell<Trigger>>) -> Self {
        Self { inner }
    }

    /// Whether the backing trigger still exists.
    pub fn is_valid(&self) -> bool {
        self.inner.strong_count() > 0
    }

    fn upgrade(&self, operation: &str) -> Option<TriggerCell> {
        let cell = self.inner.upgrade();
        if cell.is_none() {
            warn!("{operation} on expired trigger handle");
        }
        cell
    }

    /// Store or overwrite a named parameter for the next fire.
    pub fn set_parameter(&self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        if let Some(cell) = self.upgrade("set_parameter") {
            cell.borrow_mut().set_parameter(key, value);
        }
    }

    /// Fire the trigger now. See [`Trigger`] firing semantics.
    pub fn fire(&self) {
        if let Some(cell) = self.upgrade("fire") {
            fire(&cell);
        }
    }

    pub fn enable(&self) {
        if let Some(cell) = self.upgrade("enable") {
            cell.borrow_mut().enable();
        }
    }

    pub fn disable(&self) {
        if let Some(cell) = self.upgrade("disable") {
            cell.borrow_mut().disable();
        }
    }

    /// False when the trigger is disabled or the handle has expired.
    pub fn is_enabled(&self) -> bool {
        self.inner
            .upgrade()
            .map(|cell| cell.borrow().is_enabled())
            .unwrap_or(false)
    }

    /// Record interest from `environment` on the backing trigger.
    pub fn register_callback(
        &self,
        owner: impl Into<String>,
        environment: Rc<dyn CallbackEnvironment>,
        callback: impl Into<String>,
        liveness: Liveness,
    ) {
        if let Some(cell) = self.upgrade("register_callback") {
            cell.borrow_mut()
                .register_callback(owner, environment, callback, liveness);
        }
    }

    /// Drop the registration from the given environment, if any.
    pub fn unregister_callback(&self, env_id: EnvironmentId) {
        if let Some(cell) = self.inner.upgrade() {
            cell.borrow_mut().unregister_callback(env_id);
        }
    }
}
