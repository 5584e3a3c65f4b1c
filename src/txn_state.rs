use log::debug;

use crate::config::SessionConfig;
use crate::engine::{EngineIsolation, EnginePriority};
use crate::errors::{Result, TxnModeError};

/// Trait for the session-scoped object holding the live settings of the
/// currently open transaction.
///
/// The mode applier only ever calls these two setters. Each implementation
/// decides when a change is legal (for example, only before the transaction
/// has executed its first statement) and reports violations as errors. The
/// applier surfaces those errors unchanged.
pub trait TransactionState {
    /// Sets the isolation level of the open transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is in a state where the isolation
    /// level can no longer change.
    fn set_isolation_level(&mut self, level: EngineIsolation) -> Result<()>;

    /// Sets the priority of the open transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction is in a state where the priority
    /// can no longer change.
    fn set_priority(&mut self, priority: EnginePriority) -> Result<()>;
}

/// The in-memory transaction state of one SQL session.
///
/// Isolation level and priority may only change while a transaction is open
/// and before it has executed any statement. Every `begin` resets both to the
/// session defaults.
#[derive(Debug, Clone)]
pub struct SessionTxnState {
    defaults: SessionConfig,
    open: bool,
    statements_executed: u64,
    isolation_level: EngineIsolation,
    priority: EnginePriority,
}

impl SessionTxnState {
    /// Creates a new session transaction state with no open transaction.
    ///
    /// # Arguments
    ///
    /// * `defaults` - The isolation level and priority every new transaction
    ///   starts with.
    ///
    /// # Examples
    ///
    /// ```
    /// use txnmode::prelude::*;
    ///
    /// let mut state = SessionTxnState::new(SessionConfig::default());
    /// state.begin().unwrap();
    /// state.set_priority(EnginePriority::MAX).unwrap();
    /// assert_eq!(state.priority(), EnginePriority::MAX);
    /// ```
    pub fn new(defaults: SessionConfig) -> Self {
        Self {
            isolation_level: defaults.default_isolation,
            priority: defaults.default_priority,
            defaults,
            open: false,
            statements_executed: 0,
        }
    }

    /// Opens a new transaction, resetting its settings to the session
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TxnModeError::InvalidTxnState`] if a transaction is already
    /// open.
    pub fn begin(&mut self) -> Result<()> {
        if self.open {
            return Err(TxnModeError::InvalidTxnState(
                "there is already a transaction in progress".to_string(),
            ));
        }
        self.open = true;
        self.statements_executed = 0;
        self.isolation_level = self.defaults.default_isolation;
        self.priority = self.defaults.default_priority;
        debug!(
            "Opened transaction (isolation: {}, priority: {})",
            self.isolation_level, self.priority
        );
        Ok(())
    }

    /// Records that the open transaction executed a statement. From here on
    /// its isolation level and priority are fixed.
    pub fn record_statement(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.statements_executed += 1;
        Ok(())
    }

    /// Closes the open transaction. Whether it committed or rolled back is
    /// the coordinator's concern.
    pub fn finish(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.open = false;
        debug!(
            "Closed transaction after {} statement(s)",
            self.statements_executed
        );
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn statements_executed(&self) -> u64 {
        self.statements_executed
    }

    pub fn isolation_level(&self) -> EngineIsolation {
        self.isolation_level
    }

    pub fn priority(&self) -> EnginePriority {
        self.priority
    }

    fn ensure_open(&self) -> Result<()> {
        if !self.open {
            return Err(TxnModeError::InvalidTxnState(
                "there is no transaction in progress".to_string(),
            ));
        }
        Ok(())
    }

    fn ensure_mutable(&self, setting: &str) -> Result<()> {
        self.ensure_open()?;
        if self.statements_executed > 0 {
            return Err(TxnModeError::InvalidTxnState(format!(
                "cannot change the {setting} of a running transaction"
            )));
        }
        Ok(())
    }
}

impl TransactionState for SessionTxnState {
    fn set_isolation_level(&mut self, level: EngineIsolation) -> Result<()> {
        self.ensure_mutable("isolation level")?;
        self.isolation_level = level;
        Ok(())
    }

    fn set_priority(&mut self, priority: EnginePriority) -> Result<()> {
        self.ensure_mutable("user priority")?;
        self.priority = priority;
        Ok(())
    }
}
