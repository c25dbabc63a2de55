//! Callback-environment seam between the trigger core and the scripting host.
//!
//! The core never inspects script internals. It talks to the embedded
//! interpreter through one narrow contract: "invoke the named callback in
//! this environment with this parameter bag". Anything implementing
//! [`CallbackEnvironment`] can receive trigger fires; the [`lua`] submodule
//! adapts an `mlua` table when the `lua` feature is enabled.
//!
//! Registrations outlive neither the trigger nor the owner reliably, so
//! every registration carries a [`Liveness`] observer derived from an
//! [`OwnerToken`] the consumer holds. Firing code checks liveness right
//! before invoking, which makes it safe for the owner to be deactivated or
//! destroyed at arbitrary times, including mid-update.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::triggers::ParameterBag;

#[cfg(feature = "lua")]
pub mod lua;

/// Stable identity of a callback environment, used to dedupe registrations.
pub type EnvironmentId = usize;

/// Error reported by an environment while running a callback.
///
/// These never abort a fire pass; the trigger logs them and moves on to the
/// next registration.
#[derive(Debug, Clone, Error)]
#[error("callback '{callback}' failed: {message}")]
pub struct ScriptError {
    /// Name of the callback that was being invoked.
    pub callback: String,
    /// Human-readable failure description from the scripting host.
    pub message: String,
}

impl ScriptError {
    pub fn new(callback: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            callback: callback.into(),
            message: message.into(),
        }
    }
}

/// Opaque execution context able to run a named callback.
pub trait CallbackEnvironment {
    /// Identity used to detect re-registration from the same environment.
    ///
    /// Two handles to the same underlying environment must report the same
    /// id for the "one registration per environment" invariant to hold.
    fn env_id(&self) -> EnvironmentId;

    /// Run `callback` with the given parameter bag.
    fn invoke(&self, callback: &str, parameters: &ParameterBag) -> Result<(), ScriptError>;
}

/// Activity capability held by the consumer that registered a callback.
///
/// While the token exists and is active, registrations derived from it are
/// invoked on fire. Deactivating the token (or dropping it) silences them
/// without touching the trigger, so teardown needs no coordination with the
/// registry.
#[derive(Debug)]
pub struct OwnerToken {
    active: Rc<Cell<bool>>,
}

impl OwnerToken {
    /// Create an active token.
    pub fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    /// Toggle whether registrations derived from this token are invoked.
    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Derive the weak liveness observer stored inside registrations.
    pub fn liveness(&self) -> Liveness {
        Liveness {
            active: Rc::downgrade(&self.active),
        }
    }
}

impl Default for OwnerToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak observer of an [`OwnerToken`], stored per callback registration.
#[derive(Debug, Clone)]
pub struct Liveness {
    active: Weak<Cell<bool>>,
}

impl Liveness {
    /// True while the owning token still exists and is active.
    pub fn is_alive(&self) -> bool {
        self.active.upgrade().map(|flag| flag.get()).unwrap_or(false)
    }
}
