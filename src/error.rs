//! Error taxonomy for the trigger registry.
//!
//! Every fallible registry operation detects its precondition violation
//! synchronously and returns before mutating any state. Removal and
//! unregistration paths are deliberately exempt from this taxonomy: tearing
//! down something that is already gone is a silent no-op, because teardown
//! ordering across independently-owned objects cannot be guaranteed.

use thiserror::Error;

/// Errors raised by [`TriggerManager`](crate::triggers::TriggerManager) and
/// [`TriggerGroup`](crate::triggers::TriggerGroup) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// The requested namespace does not exist.
    #[error("unknown trigger namespace '{space}'")]
    UnknownNamespace { space: String },

    /// A namespace with this name already exists.
    #[error("trigger namespace '{space}' already exists")]
    NamespaceAlreadyExists { space: String },

    /// The requested trigger group does not exist in the namespace.
    #[error("unknown trigger group '{group}' in namespace '{space}'")]
    UnknownCustomTriggerGroup { space: String, group: String },

    /// A trigger group with this name already exists in the namespace.
    #[error("trigger group '{group}' already exists in namespace '{space}'")]
    TriggerGroupAlreadyExists { space: String, group: String },

    /// The trigger group exists but was created as private/exclusive.
    #[error("trigger group '{group}' in namespace '{space}' is not joinable")]
    TriggerGroupNotJoinable { space: String, group: String },

    /// The requested trigger does not exist in the group.
    #[error("unknown trigger '{trigger}' in group '{group}'")]
    UnknownTrigger { group: String, trigger: String },

    /// A trigger with this name already exists in the group.
    #[error("trigger '{trigger}' already exists in group '{group}'")]
    DuplicateTrigger { group: String, trigger: String },
}
