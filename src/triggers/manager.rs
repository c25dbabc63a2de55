//! Two-level trigger registry and delayed-trigger scheduler.
//!
//! The [`TriggerManager`] exclusively owns every namespace, group, and
//! trigger. External holders receive [`TriggerGroupHandle`]s: weak
//! observers that expire the moment the backing group is destroyed. The
//! registry counts live handles per group; dropping the last one enqueues
//! an automatic, idempotent removal of the backing group. Releases are
//! applied at the start of every manager operation, so a handle may be
//! dropped at any time, including from within a callback invoked by
//! [`update`](TriggerManager::update).

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};
use rustc_hash::FxHashMap;

use super::group::TriggerGroup;
use super::parameter::ParameterValue;
use super::trigger::{self, Trigger, TriggerHandle};
use crate::error::TriggerError;
use crate::time::Chronometer;

type GroupCell = Rc<RefCell<TriggerGroup>>;

/// Registry slot for one group: the owning cell plus the count of live
/// handles to it.
struct GroupEntry {
    cell: GroupCell,
    handle_refs: Rc<Cell<usize>>,
}

/// Release requests posted by dropped handles, applied by the manager.
pub(crate) struct HandleShared {
    pending_releases: RefCell<Vec<(String, String)>>,
}

/// A deferred activation waiting in the manager queue.
struct DelayedTrigger {
    trigger: Weak<RefCell<Trigger>>,
    deadline: f64,
}

/// Owns namespaces of trigger groups and drives delayed-trigger promotion.
///
/// Construction creates the `"Global"` namespace and starts the scheduling
/// clock. After [`clear`](TriggerManager::clear), `"Global"` is gone and it
/// is the caller's responsibility to recreate it before further use.
pub struct TriggerManager {
    namespaces: FxHashMap<String, FxHashMap<String, GroupEntry>>,
    delayed: Vec<DelayedTrigger>,
    clock: Chronometer,
    shared: Rc<HandleShared>,
}

impl TriggerManager {
    /// Create a manager with a running clock and an empty `"Global"`
    /// namespace.
    pub fn new() -> Self {
        debug!("initialising trigger manager");
        let mut manager = Self {
            namespaces: FxHashMap::default(),
            delayed: Vec::new(),
            clock: Chronometer::new(),
            shared: Rc::new(HandleShared {
                pending_releases: RefCell::new(Vec::new()),
            }),
        };
        manager
            .namespaces
            .insert("Global".to_owned(), FxHashMap::default());
        manager.clock.start();
        manager
    }

    /// Create an empty namespace.
    pub fn create_namespace(&mut self, space: &str) -> Result<(), TriggerError> {
        self.reap_released();
        debug!("creating trigger namespace '{space}'");
        if self.namespaces.contains_key(space) {
            return Err(TriggerError::NamespaceAlreadyExists {
                space: space.to_owned(),
            });
        }
        self.namespaces.insert(space.to_owned(), FxHashMap::default());
        Ok(())
    }

    /// Destroy a namespace and every group and trigger it contains.
    ///
    /// Outstanding group and trigger handles into the namespace expire
    /// immediately, and their eventual release finds nothing left to
    /// remove.
    pub fn remove_namespace(&mut self, space: &str) -> Result<(), TriggerError> {
        self.reap_released();
        debug!("removing trigger namespace '{space}'");
        if self.namespaces.remove(space).is_none() {
            return Err(TriggerError::UnknownNamespace {
                space: space.to_owned(),
            });
        }
        Ok(())
    }

    /// Allocate a new group in the namespace and return an owning handle.
    pub fn create_trigger_group(
        &mut self,
        space: &str,
        group: &str,
    ) -> Result<TriggerGroupHandle, TriggerError> {
        self.reap_released();
        debug!("creating trigger group '{group}' in namespace '{space}'");
        let groups = self.groups_mut(space)?;
        if groups.contains_key(group) {
            return Err(TriggerError::TriggerGroupAlreadyExists {
                space: space.to_owned(),
                group: group.to_owned(),
            });
        }
        let cell = Rc::new(RefCell::new(TriggerGroup::new(space, group)));
        let handle_refs = Rc::new(Cell::new(0));
        groups.insert(
            group.to_owned(),
            GroupEntry {
                cell: Rc::clone(&cell),
                handle_refs: Rc::clone(&handle_refs),
            },
        );
        Ok(self.make_handle(space, group, &cell, &handle_refs))
    }

    /// Obtain another handle to an existing, joinable group.
    pub fn join_trigger_group(
        &mut self,
        space: &str,
        group: &str,
    ) -> Result<TriggerGroupHandle, TriggerError> {
        self.reap_released();
        debug!("joining trigger group '{group}' in namespace '{space}'");
        let (cell, handle_refs) = {
            let entry = self.group_entry(space, group)?;
            (Rc::clone(&entry.cell), Rc::clone(&entry.handle_refs))
        };
        if !cell.borrow().is_joinable() {
            return Err(TriggerError::TriggerGroupNotJoinable {
                space: space.to_owned(),
                group: group.to_owned(),
            });
        }
        Ok(self.make_handle(space, group, &cell, &handle_refs))
    }

    /// Weak handle to a trigger addressed by namespace, group, and name.
    pub fn get_trigger(
        &mut self,
        space: &str,
        group: &str,
        trigger: &str,
    ) -> Result<TriggerHandle, TriggerError> {
        self.reap_released();
        self.group_entry(space, group)?.cell.borrow().get_trigger(trigger)
    }

    /// Names of all triggers in the group, in creation order.
    pub fn trigger_names(&mut self, space: &str, group: &str) -> Result<Vec<String>, TriggerError> {
        self.reap_released();
        Ok(self.group_entry(space, group)?.cell.borrow().trigger_names())
    }

    /// Names of all groups in the namespace, in unspecified order.
    pub fn group_names(&mut self, space: &str) -> Result<Vec<String>, TriggerError> {
        self.reap_released();
        Ok(self.groups(space)?.keys().cloned().collect())
    }

    /// Whether the group exists. The namespace itself must exist.
    pub fn trigger_group_exists(&mut self, space: &str, group: &str) -> Result<bool, TriggerError> {
        self.reap_released();
        Ok(self.groups(space)?.contains_key(group))
    }

    /// Once-per-tick scheduling pass.
    ///
    /// Drains every group's pending delayed requests into the manager
    /// queue, stamping each deadline against the manager clock, then
    /// promotes queue entries whose deadline has elapsed by re-enabling
    /// their target trigger. Promotion never fires anything, and an entry
    /// whose target was already enabled by other means is simply dropped.
    pub fn update(&mut self) {
        self.reap_released();
        trace!("updating trigger manager");
        let now = self.clock.elapsed();
        for groups in self.namespaces.values() {
            for entry in groups.values() {
                for request in entry.cell.borrow_mut().drain_delayed() {
                    self.delayed.push(DelayedTrigger {
                        trigger: request.trigger,
                        deadline: now + request.delay,
                    });
                }
            }
        }
        // Two-pass promotion: partition due entries out, compact the queue,
        // then touch the targets. Nothing is removed mid-scan.
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.delayed.len());
        for entry in self.delayed.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else if entry.trigger.strong_count() > 0 {
                remaining.push(entry);
            }
            // Entries whose target died with its group are dropped here.
        }
        self.delayed = remaining;
        for entry in due {
            if let Some(cell) = entry.trigger.upgrade() {
                let mut target = cell.borrow_mut();
                if !target.is_enabled() {
                    debug!("promoting delayed trigger '{}'", target.name());
                    target.enable();
                }
            }
        }
    }

    /// Release all delayed triggers, erase every namespace, and restart the
    /// clock from zero.
    ///
    /// `"Global"` is erased along with everything else and is *not*
    /// recreated; callers expecting further use must recreate it.
    pub fn clear(&mut self) {
        debug!("clearing trigger manager");
        self.delayed.clear();
        self.shared.pending_releases.borrow_mut().clear();
        self.namespaces.clear();
        self.clock.reset();
        self.clock.start();
    }

    fn make_handle(
        &self,
        space: &str,
        group: &str,
        cell: &GroupCell,
        handle_refs: &Rc<Cell<usize>>,
    ) -> TriggerGroupHandle {
        handle_refs.set(handle_refs.get() + 1);
        TriggerGroupHandle {
            group: Rc::downgrade(cell),
            space: space.to_owned(),
            name: group.to_owned(),
            refs: Rc::clone(handle_refs),
            shared: Rc::downgrade(&self.shared),
        }
    }

    fn groups(&self, space: &str) -> Result<&FxHashMap<String, GroupEntry>, TriggerError> {
        self.namespaces
            .get(space)
            .ok_or_else(|| TriggerError::UnknownNamespace {
                space: space.to_owned(),
            })
    }

    fn groups_mut(
        &mut self,
        space: &str,
    ) -> Result<&mut FxHashMap<String, GroupEntry>, TriggerError> {
        self.namespaces
            .get_mut(space)
            .ok_or_else(|| TriggerError::UnknownNamespace {
                space: space.to_owned(),
            })
    }

    fn group_entry(&self, space: &str, group: &str) -> Result<&GroupEntry, TriggerError> {
        self.groups(space)?
            .get(group)
            .ok_or_else(|| TriggerError::UnknownCustomTriggerGroup {
                space: space.to_owned(),
                group: group.to_owned(),
            })
    }

    /// Apply release requests posted by dropped handles. A group is removed
    /// only if no new handle to it appeared since the release was posted;
    /// releases against already-removed groups are no-ops.
    fn reap_released(&mut self) {
        let pending = std::mem::take(&mut *self.shared.pending_releases.borrow_mut());
        for (space, group) in pending {
            let Some(groups) = self.namespaces.get_mut(&space) else {
                continue;
            };
            let unreferenced = groups
                .get(&group)
                .map(|entry| entry.handle_refs.get() == 0)
                .unwrap_or(false);
            if unreferenced {
                debug!("removing trigger group '{group}' from namespace '{space}' (last handle released)");
                groups.remove(&group);
            }
        }
    }
}

impl Default for TriggerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a trigger group.
///
/// The handle observes the group weakly: destroying the enclosing
/// namespace, or clearing the manager, expires every outstanding handle at
/// once, and operations on an expired handle degrade the same way
/// [`TriggerHandle`] operations do. The registry counts live handles
/// separately; dropping the last one posts a release request that the
/// manager applies at its next operation, removing the group even if the
/// holder forgot an explicit delete. All trigger access forwards to the
/// named trigger and reports [`TriggerError::UnknownTrigger`] when absent.
#[derive(Debug)]
pub struct TriggerGroupHandle {
    group: Weak<RefCell<TriggerGroup>>,
    space: String,
    name: String,
    refs: Rc<Cell<usize>>,
    shared: Weak<HandleShared>,
}

impl TriggerGroupHandle {
    pub fn namespace(&self) -> &str {
        &self.space
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the backing group still exists.
    pub fn is_valid(&self) -> bool {
        self.group.strong_count() > 0
    }

    fn upgrade(&self, operation: &str) -> Option<GroupCell> {
        let cell = self.group.upgrade();
        if cell.is_none() {
            warn!(
                "{operation} on handle to destroyed trigger group '{}/{}'",
                self.space, self.name
            );
        }
        cell
    }

    fn upgrade_or_unknown(&self, operation: &str) -> Result<GroupCell, TriggerError> {
        self.upgrade(operation)
            .ok_or_else(|| TriggerError::UnknownCustomTriggerGroup {
                space: self.space.clone(),
                group: self.name.clone(),
            })
    }

    /// False when the group is private/exclusive or already destroyed.
    pub fn is_joinable(&self) -> bool {
        self.group
            .upgrade()
            .map(|cell| cell.borrow().is_joinable())
            .unwrap_or(false)
    }

    /// Mark the group as shared or private/exclusive.
    pub fn set_joinable(&self, joinable: bool) {
        if let Some(cell) = self.upgrade("set_joinable") {
            cell.borrow_mut().set_joinable(joinable);
        }
    }

    /// Create a new trigger in the group.
    pub fn add_trigger(&self, trigger: &str) -> Result<(), TriggerError> {
        self.upgrade_or_unknown("add_trigger")?
            .borrow_mut()
            .add_trigger(trigger)
    }

    /// Remove a trigger by name. Silent no-op when absent.
    pub fn remove_trigger(&self, trigger: &str) {
        if let Some(cell) = self.upgrade("remove_trigger") {
            cell.borrow_mut().remove_trigger(trigger);
        }
    }

    /// Weak handle to the named trigger.
    pub fn get_trigger(&self, trigger: &str) -> Result<TriggerHandle, TriggerError> {
        self.upgrade_or_unknown("get_trigger")?
            .borrow()
            .get_trigger(trigger)
    }

    /// Store or overwrite a parameter on the named trigger.
    pub fn push_parameter(
        &self,
        trigger: &str,
        key: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Result<(), TriggerError> {
        let group = self.upgrade_or_unknown("push_parameter")?;
        let cell = group.borrow().find_or_unknown(trigger)?;
        cell.borrow_mut().set_parameter(key, value);
        Ok(())
    }

    /// Fire the named trigger now.
    ///
    /// The group borrow is released before any callback runs, so callbacks
    /// may re-enter the group (add, remove, delay, fire) freely.
    pub fn trigger(&self, trigger: &str) -> Result<(), TriggerError> {
        let group = self.upgrade_or_unknown("trigger")?;
        let cell = group.borrow().find_or_unknown(trigger)?;
        trigger::fire(&cell);
        Ok(())
    }

    /// Capture a delayed-fire request resolved by the manager's next
    /// scheduling pass. Queued requests cannot be retracted.
    pub fn delay_trigger(&self, trigger: &str, delay: f64) -> Result<(), TriggerError> {
        self.upgrade_or_unknown("delay_trigger")?
            .borrow_mut()
            .delay_trigger(trigger, delay)
    }

    /// Names of all triggers in the group, in creation order. Empty once
    /// the group has been destroyed.
    pub fn trigger_names(&self) -> Vec<String> {
        self.group
            .upgrade()
            .map(|cell| cell.borrow().trigger_names())
            .unwrap_or_default()
    }
}

impl Drop for TriggerGroupHandle {
    fn drop(&mut self) {
        let remaining = self.refs.get().saturating_sub(1);
        self.refs.set(remaining);
        if remaining == 0 {
            if let Some(shared) = self.shared.upgrade() {
                shared
                    .pending_releases
                    .borrow_mut()
                    .push((self.space.clone(), self.name.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::script::OwnerToken;
    use crate::script::testing::RecordingEnvironment;
    use crate::triggers::parameter::ParameterValue;

    #[test]
    fn test_new_manager_has_global_namespace() {
        let mut manager = TriggerManager::new();
        assert!(manager.group_names("Global").unwrap().is_empty());
        assert!(matches!(
            manager.create_namespace("Global"),
            Err(TriggerError::NamespaceAlreadyExists { .. })
        ));
    }

    #[test]
    fn test_create_duplicate_group_fails_and_first_stays_usable() {
        let mut manager = TriggerManager::new();
        manager.create_namespace("Game").unwrap();
        let handle = manager.create_trigger_group("Game", "Enemies").unwrap();
        assert!(matches!(
            manager.create_trigger_group("Game", "Enemies"),
            Err(TriggerError::TriggerGroupAlreadyExists { .. })
        ));
        handle.add_trigger("Spawn").unwrap();
        assert!(manager.trigger_group_exists("Game", "Enemies").unwrap());
    }

    #[test]
    fn test_create_group_in_unknown_namespace_fails() {
        let mut manager = TriggerManager::new();
        assert!(matches!(
            manager.create_trigger_group("Nowhere", "Enemies"),
            Err(TriggerError::UnknownNamespace { .. })
        ));
    }

    #[test]
    fn test_join_missing_group_and_namespace() {
        let mut manager = TriggerManager::new();
        assert!(matches!(
            manager.join_trigger_group("Nowhere", "Enemies"),
            Err(TriggerError::UnknownNamespace { .. })
        ));
        assert!(matches!(
            manager.join_trigger_group("Global", "Enemies"),
            Err(TriggerError::UnknownCustomTriggerGroup { .. })
        ));
    }

    #[test]
    fn test_join_private_group_fails() {
        let mut manager = TriggerManager::new();
        let handle = manager.create_trigger_group("Global", "Local").unwrap();
        handle.set_joinable(false);
        assert!(matches!(
            manager.join_trigger_group("Global", "Local"),
            Err(TriggerError::TriggerGroupNotJoinable { .. })
        ));
    }

    #[test]
    fn test_last_handle_release_removes_group() {
        let mut manager = TriggerManager::new();
        let created = manager.create_trigger_group("Global", "Enemies").unwrap();
        let joined = manager.join_trigger_group("Global", "Enemies").unwrap();

        drop(created);
        assert!(manager.group_names("Global").unwrap().contains(&"Enemies".to_owned()));

        drop(joined);
        assert!(manager.group_names("Global").unwrap().is_empty());
    }

    #[test]
    fn test_handle_dropped_inside_callback_is_reaped_later() {
        let mut manager = TriggerManager::new();
        let handle = manager.create_trigger_group("Global", "Ui").unwrap();
        handle.add_trigger("Refresh").unwrap();
        let refresh = handle.get_trigger("Refresh").unwrap();

        // The callback drops the last group handle mid-fire; the release
        // is posted safely and applied by the next manager operation.
        let stashed = Rc::new(RefCell::new(Some(handle)));
        let dropper = Rc::clone(&stashed);
        let token = OwnerToken::new();
        let env = Rc::new(RecordingEnvironment::with_hook(move || {
            dropper.borrow_mut().take();
        }));
        refresh.register_callback("ui", env, "on_refresh", token.liveness());

        refresh.fire();
        assert!(stashed.borrow().is_none());
        assert!(!manager.trigger_group_exists("Global", "Ui").unwrap());
    }

    #[test]
    fn test_remove_namespace_destroys_groups() {
        let mut manager = TriggerManager::new();
        manager.create_namespace("Game").unwrap();
        let handle = manager.create_trigger_group("Game", "Enemies").unwrap();
        handle.add_trigger("Spawn").unwrap();
        let trigger = manager.get_trigger("Game", "Enemies", "Spawn").unwrap();

        manager.remove_namespace("Game").unwrap();
        assert!(matches!(
            manager.group_names("Game"),
            Err(TriggerError::UnknownNamespace { .. })
        ));
        // Trigger handles expire once the namespace is gone, and the
        // outstanding group handle release finds nothing to remove.
        assert!(!trigger.is_valid());
        drop(handle);
        manager.update();
    }

    #[test]
    fn test_handle_to_destroyed_group_degrades_to_noops() {
        let mut manager = TriggerManager::new();
        manager.create_namespace("Game").unwrap();
        let handle = manager.create_trigger_group("Game", "Enemies").unwrap();
        handle.add_trigger("Spawn").unwrap();

        manager.remove_namespace("Game").unwrap();
        assert!(!handle.is_valid());
        assert!(!handle.is_joinable());
        assert!(handle.trigger_names().is_empty());
        assert!(matches!(
            handle.add_trigger("Despawn"),
            Err(TriggerError::UnknownCustomTriggerGroup { .. })
        ));
        assert!(matches!(
            handle.trigger("Spawn"),
            Err(TriggerError::UnknownCustomTriggerGroup { .. })
        ));
        handle.remove_trigger("Spawn");
    }

    #[test]
    fn test_clear_invalidates_outstanding_handles() {
        let mut manager = TriggerManager::new();
        let handle = manager.create_trigger_group("Global", "Ui").unwrap();
        handle.add_trigger("Refresh").unwrap();
        let refresh = handle.get_trigger("Refresh").unwrap();

        manager.clear();
        assert!(!handle.is_valid());
        assert!(!refresh.is_valid());
    }

    #[test]
    fn test_spawn_scenario_invokes_callbacks_with_parameters() {
        let mut manager = TriggerManager::new();
        manager.create_namespace("Game").unwrap();
        let enemies = manager.create_trigger_group("Game", "Enemies").unwrap();
        enemies.add_trigger("Spawn").unwrap();

        let token = OwnerToken::new();
        let env = Rc::new(RecordingEnvironment::new());
        let log = env.log();
        manager
            .get_trigger("Game", "Enemies", "Spawn")
            .unwrap()
            .register_callback("spawner", env, "on_spawn", token.liveness());

        enemies.push_parameter("Spawn", "count", 3).unwrap();
        enemies.trigger("Spawn").unwrap();

        let invocations = log.borrow();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].0, "on_spawn");
        assert_eq!(
            invocations[0].1.get("count"),
            Some(&ParameterValue::Integer(3))
        );
        drop(invocations);

        assert!(matches!(
            manager.get_trigger("Game", "Bosses", "Spawn"),
            Err(TriggerError::UnknownCustomTriggerGroup { .. })
        ));
    }

    #[test]
    fn test_delayed_trigger_promotes_at_deadline() {
        let mut manager = TriggerManager::new();
        let handle = manager.create_trigger_group("Global", "Enemies").unwrap();
        handle.add_trigger("Wave").unwrap();
        let wave = handle.get_trigger("Wave").unwrap();

        handle.delay_trigger("Wave", 1.0).unwrap();
        assert!(!wave.is_enabled());

        // First update stamps the deadline; the delay has not elapsed.
        manager.update();
        assert!(!wave.is_enabled());

        manager.clock.advance(0.5);
        manager.update();
        assert!(!wave.is_enabled());

        manager.clock.advance(0.6);
        manager.update();
        assert!(wave.is_enabled());
        assert!(manager.delayed.is_empty());
    }

    #[test]
    fn test_delayed_request_stamped_after_capture_tick() {
        let mut manager = TriggerManager::new();
        let handle = manager.create_trigger_group("Global", "Enemies").unwrap();
        handle.add_trigger("Wave").unwrap();
        let wave = handle.get_trigger("Wave").unwrap();

        // Time passing between capture and the first scheduling pass must
        // not count against the delay.
        handle.delay_trigger("Wave", 1.0).unwrap();
        manager.clock.advance(10.0);
        manager.update();
        assert!(!wave.is_enabled());

        manager.clock.advance(1.1);
        manager.update();
        assert!(wave.is_enabled());
    }

    #[test]
    fn test_promotion_ignores_already_enabled_trigger() {
        let mut manager = TriggerManager::new();
        let handle = manager.create_trigger_group("Global", "Enemies").unwrap();
        handle.add_trigger("Wave").unwrap();
        let wave = handle.get_trigger("Wave").unwrap();

        handle.delay_trigger("Wave", 1.0).unwrap();
        manager.update();
        wave.enable();

        manager.clock.advance(2.0);
        manager.update();
        assert!(wave.is_enabled());
        assert!(manager.delayed.is_empty());
    }

    #[test]
    fn test_delayed_entry_for_destroyed_group_is_dropped() {
        let mut manager = TriggerManager::new();
        manager.create_namespace("Game").unwrap();
        let handle = manager.create_trigger_group("Game", "Enemies").unwrap();
        handle.add_trigger("Wave").unwrap();
        handle.delay_trigger("Wave", 1.0).unwrap();
        manager.update();
        assert_eq!(manager.delayed.len(), 1);

        manager.remove_namespace("Game").unwrap();
        manager.update();
        assert!(manager.delayed.is_empty());
    }

    #[test]
    fn test_clear_erases_everything_including_global() {
        let mut manager = TriggerManager::new();
        manager.create_namespace("Game").unwrap();
        let handle = manager.create_trigger_group("Game", "Enemies").unwrap();
        handle.add_trigger("Wave").unwrap();
        handle.delay_trigger("Wave", 1.0).unwrap();
        manager.update();

        manager.clear();
        assert!(manager.delayed.is_empty());
        // Global is gone too; recreating it is the caller's job.
        assert!(matches!(
            manager.group_names("Global"),
            Err(TriggerError::UnknownNamespace { .. })
        ));
        manager.create_namespace("Global").unwrap();
        assert!(manager.group_names("Global").unwrap().is_empty());
    }

    #[test]
    fn test_trigger_names_through_manager() {
        let mut manager = TriggerManager::new();
        let handle = manager.create_trigger_group("Global", "Enemies").unwrap();
        handle.add_trigger("Spawn").unwrap();
        handle.add_trigger("Hit").unwrap();
        assert_eq!(
            manager.trigger_names("Global", "Enemies").unwrap(),
            vec!["Spawn", "Hit"]
        );
        assert!(matches!(
            manager.trigger_names("Global", "Bosses"),
            Err(TriggerError::UnknownCustomTriggerGroup { .. })
        ));
    }
}
