//! # Multitodo Testing
//!
//! Testing utilities for the multitodo crates.
//!
//! This crate provides:
//! - Deterministic environment doubles (`FixedClock`, `SequentialIds`)
//! - A Given-When-Then harness for todo operations (`TodoScenario`)
//! - Tracing setup for test output
//!
//! ## Example
//!
//! ```
//! use multitodo_testing::TodoScenario;
//!
//! TodoScenario::new()
//!     .given_user("Ana", "ana")
//!     .given_todo("ana", "buy milk", "2025-01-01")
//!     .when("ana", |ops, user| Ok(ops.list(user).len()))
//!     .then_ok(|count| assert_eq!(*count, 1));
//! ```

use chrono::{DateTime, Utc};
use multitodo_core::environment::{Clock, Environment, IdGenerator};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub mod scenario;

pub use scenario::{Outcome, TodoScenario};

/// Mock implementations of Environment traits
pub mod mocks {
    use super::{AtomicU64, Clock, DateTime, IdGenerator, Ordering, Utc, Uuid};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use multitodo_testing::mocks::FixedClock;
    /// use multitodo_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Predictable ids: `00000000-0000-0000-0000-000000000001`, `...002`, ...
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Start counting from 1.
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

pub use mocks::{FixedClock, SequentialIds, test_clock};

/// Environment with [`test_clock`] and fresh [`SequentialIds`].
#[must_use]
pub fn test_environment() -> Environment {
    Environment::new(Arc::new(test_clock()), Arc::new(SequentialIds::new()))
}

/// Route `tracing` output to the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
