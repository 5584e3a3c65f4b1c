use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::config::SessionConfig;
use crate::txn_state::SessionTxnState;

/// txnmode Prelude
pub mod prelude {
    pub use crate::applier::*;
    pub use crate::config::*;
    pub use crate::engine::*;
    pub use crate::errors::*;
    pub use crate::mapper::*;
    pub use crate::modes::*;
    pub use crate::session::Session;
    pub use crate::statement::*;
    pub use crate::txn_state::*;
}

/// One SQL session.
///
/// Statements on a session run one after another, so the session only needs
/// the lock on its transaction state to hand out exclusive access for the
/// duration of a single statement.
pub struct Session {
    /// The session's configuration.
    config: SessionConfig,
    /// The transaction state, shared with the surrounding session machinery.
    txn_state: Arc<Mutex<SessionTxnState>>,
}

impl Session {
    /// Creates a new session with no open transaction.
    pub fn new(config: SessionConfig) -> Self {
        let txn_state = Arc::new(Mutex::new(SessionTxnState::new(config.clone())));
        Self { config, txn_state }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns a shared handle to the session's transaction state.
    pub fn txn_state(&self) -> Arc<Mutex<SessionTxnState>> {
        Arc::clone(&self.txn_state)
    }

    /// Locks the transaction state for exclusive use by the current statement.
    pub fn lock_txn_state(&self) -> MutexGuard<'_, SessionTxnState> {
        self.txn_state.lock()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
