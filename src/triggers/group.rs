//! Ordered, named collection of triggers within a namespace.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use super::trigger::{Trigger, TriggerCell, TriggerHandle};
use crate::error::TriggerError;

/// A delayed-fire request captured by the group and drained by the manager.
///
/// The absolute deadline is stamped when the manager next processes its
/// scheduling pass, not at capture time, so requests queued before the
/// manager has run once still resolve against the manager's own clock.
pub(crate) struct DelayedRequest {
    pub trigger: Weak<RefCell<Trigger>>,
    pub delay: f64,
}

/// Named collection of triggers sharing a namespace and joinability policy.
///
/// Trigger names are unique per group; the creation order of triggers is
/// the order [`trigger_names`](TriggerGroup::trigger_names) reports.
pub struct TriggerGroup {
    namespace: String,
    name: String,
    joinable: bool,
    triggers: Vec<TriggerCell>,
    delayed: Vec<DelayedRequest>,
}

impl TriggerGroup {
    pub(crate) fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            joinable: true,
            triggers: Vec::new(),
            delayed: Vec::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether external code may obtain another handle to this group.
    pub fn is_joinable(&self) -> bool {
        self.joinable
    }

    /// Mark the group as shared or private/exclusive.
    pub fn set_joinable(&mut self, joinable: bool) {
        self.joinable = joinable;
    }

    /// Create a new trigger in the group.
    pub fn add_trigger(&mut self, trigger: &str) -> Result<(), TriggerError> {
        if self.contains(trigger) {
            return Err(TriggerError::DuplicateTrigger {
                group: self.name.clone(),
                trigger: trigger.to_owned(),
            });
        }
        trace!("adding trigger '{}' to group '{}'", trigger, self.name);
        self.triggers
            .push(Rc::new(RefCell::new(Trigger::new(trigger))));
        Ok(())
    }

    /// Remove a trigger by name. Silent no-op when absent; a fire pass in
    /// flight over the removed trigger completes normally, since it holds
    /// its own strong reference.
    pub fn remove_trigger(&mut self, trigger: &str) {
        let before = self.triggers.len();
        self.triggers.retain(|t| t.borrow().name() != trigger);
        if self.triggers.len() < before {
            debug!("removed trigger '{}' from group '{}'", trigger, self.name);
        }
    }

    pub fn contains(&self, trigger: &str) -> bool {
        self.triggers.iter().any(|t| t.borrow().name() == trigger)
    }

    pub(crate) fn find(&self, trigger: &str) -> Option<TriggerCell> {
        self.triggers
            .iter()
            .find(|t| t.borrow().name() == trigger)
            .cloned()
    }

    pub(crate) fn find_or_unknown(&self, trigger: &str) -> Result<TriggerCell, TriggerError> {
        self.find(trigger).ok_or_else(|| TriggerError::UnknownTrigger {
            group: self.name.clone(),
            trigger: trigger.to_owned(),
        })
    }

    /// Non-owning handle to the named trigger.
    pub fn get_trigger(&self, trigger: &str) -> Result<TriggerHandle, TriggerError> {
        let cell = self.find_or_unknown(trigger)?;
        Ok(TriggerHandle::new(Rc::downgrade(&cell)))
    }

    /// Names of all triggers currently defined, in creation order.
    pub fn trigger_names(&self) -> Vec<String> {
        self.triggers
            .iter()
            .map(|t| t.borrow().name().to_owned())
            .collect()
    }

    /// Capture a delayed-fire request for the named trigger.
    ///
    /// The target is disabled immediately and re-enabled by the manager
    /// once the delay has elapsed. Queued requests cannot be retracted.
    pub fn delay_trigger(&mut self, trigger: &str, delay: f64) -> Result<(), TriggerError> {
        let cell = self.find_or_unknown(trigger)?;
        debug!(
            "delaying trigger '{}' in group '{}' by {delay}s",
            trigger, self.name
        );
        cell.borrow_mut().disable();
        self.delayed.push(DelayedRequest {
            trigger: Rc::downgrade(&cell),
            delay,
        });
        Ok(())
    }

    pub(crate) fn drain_delayed(&mut self) -> Vec<DelayedRequest> {
        std::mem::take(&mut self.delayed)
    }
}
