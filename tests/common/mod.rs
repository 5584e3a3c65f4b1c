//! A mock transaction state for testing the mode applier.
//!
//! Records every setter call in order and can be told to fail either setter
//! on demand, so tests can observe exactly which steps ran.

use txnmode::{EngineIsolation, EnginePriority, Result, TransactionState, TxnModeError};

/// A setter call observed by [`MockTxnState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetterCall {
    Isolation(EngineIsolation),
    Priority(EnginePriority),
}

#[derive(Debug, Default)]
pub struct MockTxnState {
    pub isolation: Option<EngineIsolation>,
    pub priority: Option<EnginePriority>,
    pub calls: Vec<SetterCall>,
    isolation_error: Option<TxnModeError>,
    priority_error: Option<TxnModeError>,
}

#[allow(dead_code)]
impl MockTxnState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `set_isolation_level` call fail with `err`.
    pub fn fail_isolation_with(mut self, err: TxnModeError) -> Self {
        self.isolation_error = Some(err);
        self
    }

    /// Makes every later `set_priority` call fail with `err`.
    pub fn fail_priority_with(mut self, err: TxnModeError) -> Self {
        self.priority_error = Some(err);
        self
    }
}

impl TransactionState for MockTxnState {
    fn set_isolation_level(&mut self, level: EngineIsolation) -> Result<()> {
        self.calls.push(SetterCall::Isolation(level));
        if let Some(err) = &self.isolation_error {
            return Err(err.clone());
        }
        self.isolation = Some(level);
        Ok(())
    }

    fn set_priority(&mut self, priority: EnginePriority) -> Result<()> {
        self.calls.push(SetterCall::Priority(priority));
        if let Some(err) = &self.priority_error {
            return Err(err.clone());
        }
        self.priority = Some(priority);
        Ok(())
    }
}
