use log::{debug, warn};

use crate::errors::{Result, TxnModeError};
use crate::mapper::{map_isolation, map_priority, map_read_write_mode};
use crate::modes::TransactionModes;
use crate::txn_state::TransactionState;

/// Applies the modes declared by one `SET TRANSACTION` statement to the
/// session's transaction state.
///
/// The settings are applied in a fixed order: isolation level, then priority,
/// then read/write mode. The first error from the mapper or from a
/// `TransactionState` setter is returned unchanged and no later step runs.
///
/// **This operation is not atomic.** Settings applied before the failing step
/// are not rolled back: if the priority step fails, the isolation level has
/// already been changed and stays changed. Callers must not assume that an
/// `Err` leaves `state` untouched.
///
/// The read/write mode is validated only. It never reaches `state` because
/// nothing persists it.
///
/// Applying the same fully specified modes twice, with no error in between,
/// leaves `state` as it was after the first call.
///
/// # Arguments
///
/// * `modes` - The modes declared by the statement.
/// * `state` - The transaction state to mutate.
///
/// # Errors
///
/// * [`TxnModeError::UnknownEnumValue`]
///   if a mode is outside its closed enumeration.
/// * [`TxnModeError::UnsupportedFeature`]
///   for `READ ONLY`.
/// * Whatever error a `TransactionState` setter returns.
///
/// # Examples
///
/// ```
/// use txnmode::prelude::*;
///
/// let mut state = SessionTxnState::new(SessionConfig::default());
/// state.begin().unwrap();
///
/// let modes = TransactionModes::new(
///     IsolationLevel::Snapshot,
///     UserPriority::Unspecified,
///     ReadWriteMode::Unspecified,
/// );
/// apply_transaction_modes(&modes, &mut state).unwrap();
/// assert_eq!(state.isolation_level(), EngineIsolation::Snapshot);
/// assert_eq!(state.priority(), EnginePriority::NORMAL);
/// ```
pub fn apply_transaction_modes<S>(modes: &TransactionModes, state: &mut S) -> Result<()>
where
    S: TransactionState + ?Sized,
{
    let mut applied = false;

    if let Some(level) = map_isolation(modes.isolation)? {
        state.set_isolation_level(level)?;
        debug!("Set transaction isolation level to {}", level);
        applied = true;
    }

    if let Some(priority) =
        map_priority(modes.user_priority).inspect_err(|err| log_partial(applied, err))?
    {
        state
            .set_priority(priority)
            .inspect_err(|err| log_partial(applied, err))?;
        debug!("Set transaction priority to {}", priority);
        applied = true;
    }

    // Validated only: there is nowhere to persist the read/write mode.
    map_read_write_mode(modes.read_write_mode).inspect_err(|err| log_partial(applied, err))
}

fn log_partial(applied: bool, err: &TxnModeError) {
    if applied {
        warn!(
            "SET TRANSACTION failed after applying earlier settings, leaving them in place: {}",
            err
        );
    }
}
