//! Translation of SQL-level transaction modes into engine-level settings.
//!
//! Each function is pure and deterministic. `Ok(None)` means the mode was left
//! unspecified and nothing should be applied.

use crate::engine::{EngineIsolation, EnginePriority};
use crate::errors::{Result, TxnModeError};
use crate::modes::{IsolationLevel, ReadWriteMode, UserPriority};

/// Maps an SQL isolation level to the engine's isolation.
///
/// # Errors
///
/// Returns [`TxnModeError::UnknownEnumValue`] for a level outside the closed
/// set.
///
/// # Examples
///
/// ```
/// use txnmode::prelude::*;
///
/// assert_eq!(map_isolation(IsolationLevel::Unspecified).unwrap(), None);
/// assert_eq!(
///     map_isolation(IsolationLevel::Snapshot).unwrap(),
///     Some(EngineIsolation::Snapshot)
/// );
/// assert!(map_isolation(IsolationLevel::Unrecognized(7)).is_err());
/// ```
pub fn map_isolation(level: IsolationLevel) -> Result<Option<EngineIsolation>> {
    match level {
        IsolationLevel::Unspecified => Ok(None),
        IsolationLevel::Snapshot => Ok(Some(EngineIsolation::Snapshot)),
        IsolationLevel::Serializable => Ok(Some(EngineIsolation::Serializable)),
        other => Err(TxnModeError::UnknownEnumValue {
            kind: "isolation level",
            value: other.to_string(),
        }),
    }
}

/// Maps an SQL user priority to the engine's priority boundary values.
///
/// # Errors
///
/// Returns [`TxnModeError::UnknownEnumValue`] for a priority outside the
/// closed set.
pub fn map_priority(priority: UserPriority) -> Result<Option<EnginePriority>> {
    match priority {
        UserPriority::Unspecified => Ok(None),
        UserPriority::Low => Ok(Some(EnginePriority::MIN)),
        UserPriority::Normal => Ok(Some(EnginePriority::NORMAL)),
        UserPriority::High => Ok(Some(EnginePriority::MAX)),
        other => Err(TxnModeError::UnknownEnumValue {
            kind: "user priority",
            value: other.to_string(),
        }),
    }
}

/// Validates the read/write mode.
///
/// `READ WRITE` is accepted but has no effect and is not recorded anywhere.
/// If it ever gains an effect, it has to be restored when
/// `ROLLBACK TO SAVEPOINT` starts a new SQL transaction.
///
/// # Errors
///
/// * [`TxnModeError::UnsupportedFeature`] for `READ ONLY`.
/// * [`TxnModeError::UnknownEnumValue`] for a mode outside the closed set.
pub fn map_read_write_mode(mode: ReadWriteMode) -> Result<()> {
    match mode {
        ReadWriteMode::Unspecified | ReadWriteMode::ReadWrite => Ok(()),
        ReadWriteMode::ReadOnly => Err(TxnModeError::UnsupportedFeature(
            "read only not supported".to_string(),
        )),
        other => Err(TxnModeError::UnknownEnumValue {
            kind: "read mode",
            value: other.to_string(),
        }),
    }
}
