use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TxnModeError};

/// Defines the isolation levels the transaction coordinator can run a
/// transaction under.
///
/// Unlike the SQL-level [`IsolationLevel`](crate::modes::IsolationLevel), there
/// is no "unspecified" member here: an unspecified SQL level maps to no engine
/// value at all, never to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineIsolation {
    /// **Snapshot:**
    ///
    /// Every read in the transaction observes a consistent snapshot taken at
    /// the transaction's start timestamp. Write-write conflicts abort one of
    /// the transactions, but read-write anomalies such as write skew are
    /// possible.
    Snapshot,
    /// **Serializable:**
    ///
    /// The strongest level. Transactions produce the same result as if they
    /// had executed one after another. The coordinator validates reads at
    /// commit time and aborts transactions that cannot be serialized.
    Serializable,
}

impl fmt::Display for EngineIsolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineIsolation::Snapshot => f.write_str("SNAPSHOT"),
            EngineIsolation::Serializable => f.write_str("SERIALIZABLE"),
        }
    }
}

/// A transaction priority as understood by the coordinator.
///
/// Higher values win contention more often. The SQL-level `LOW`, `NORMAL`
/// and `HIGH` priorities map to [`EnginePriority::MIN`],
/// [`EnginePriority::NORMAL`] and [`EnginePriority::MAX`].
///
/// A priority always lies within `[MIN, MAX]`; NaN is never representable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct EnginePriority(f64);

impl EnginePriority {
    pub const MIN: EnginePriority = EnginePriority(0.001);
    pub const NORMAL: EnginePriority = EnginePriority(1.0);
    pub const MAX: EnginePriority = EnginePriority(1000.0);

    /// Creates a priority from a raw coordinator value.
    ///
    /// # Errors
    ///
    /// Returns [`TxnModeError::InvalidPriority`] if `value` is NaN or outside
    /// `[MIN, MAX]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use txnmode::prelude::*;
    ///
    /// assert_eq!(EnginePriority::new(1.0).unwrap(), EnginePriority::NORMAL);
    /// assert!(EnginePriority::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self> {
        // `contains` is false for NaN.
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(TxnModeError::InvalidPriority(value));
        }
        Ok(EnginePriority(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for EnginePriority {
    type Error = TxnModeError;

    fn try_from(value: f64) -> Result<Self> {
        EnginePriority::new(value)
    }
}

impl From<EnginePriority> for f64 {
    fn from(priority: EnginePriority) -> f64 {
        priority.0
    }
}

impl Default for EnginePriority {
    fn default() -> Self {
        EnginePriority::NORMAL
    }
}

impl fmt::Display for EnginePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
