//! Strongly-typed ID wrappers for all entity types
//!
//! IDs are creation-time millisecond timestamps. Using newtype wrappers
//! prevents accidentally mixing up IDs from different entity types at
//! compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw id value
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the raw id value
            pub const fn raw(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept both "1700000000000" and "exp-1700000000000"
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(UserId, "usr-");
define_id!(ExpenseId, "exp-");
define_id!(GoalId, "goal-");

/// Monotonic id source based on the wall clock
///
/// Hands out `max(now_ms, last + 1)`, so two ids taken in the same
/// millisecond still differ.
#[derive(Debug, Default)]
pub struct IdClock {
    last: AtomicI64,
}

impl IdClock {
    /// Create a new clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id value
    ///
    /// Returns `None` once an id of `i64::MAX` has been handed out or observed.
    pub fn next(&self) -> Option<i64> {
        let now = Utc::now().timestamp_millis();
        let mut current = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = now.max(current.checked_add(1)?);
            match self.last.compare_exchange(
                current,
                candidate,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return Some(candidate),
                Err(actual) => current = actual,
            }
        }
    }

    /// Advance the clock past an id that already exists
    pub fn observe(&self, raw: i64) {
        self.last.fetch_max(raw, Ordering::SeqCst);
    }
}
