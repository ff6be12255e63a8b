//! Injected dependencies for the core operations.
//!
//! Time and identifier generation are the only non-deterministic inputs the
//! core needs. Both sit behind traits so tests can pin them down (see the
//! `multitodo-testing` crate for `FixedClock` and `SequentialIds`).

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```
/// use multitodo_core::environment::{Clock, SystemClock};
///
/// let before = chrono::Utc::now();
/// assert!(SystemClock.now() >= before);
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh identifiers for users and todos.
///
/// Implementations must never hand out the same value twice.
pub trait IdGenerator: Send + Sync {
    /// Produce the next unused identifier.
    fn next_id(&self) -> Uuid;
}

/// Random UUID v4 generator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Dependencies shared by the identity store and the todo operations.
#[derive(Clone)]
pub struct Environment {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Environment {
    /// Build an environment from explicit dependencies.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// System clock and random UUIDs.
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomIds))
    }

    /// Current time according to the injected clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Next identifier from the injected generator.
    #[must_use]
    pub fn next_id(&self) -> Uuid {
        self.ids.next_id()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::production()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_do_not_repeat() {
        let ids = RandomIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn production_environment_uses_system_time() {
        let env = Environment::production();
        let before = Utc::now();
        let now = env.now();
        assert!(now >= before);
    }
}
