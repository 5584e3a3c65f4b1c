//! Statement handlers for the transaction-mode statements.

use log::debug;

use crate::applier::apply_transaction_modes;
use crate::errors::Result;
use crate::modes::TransactionModes;
use crate::session::Session;

/// The slice of the SQL AST these handlers accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    /// `SET TRANSACTION <modes>`
    SetTransaction { modes: TransactionModes },
    /// `BEGIN TRANSACTION <modes>`
    BeginTransaction { modes: TransactionModes },
}

/// Execution node produced by a statement handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanNode {
    /// Produces no rows.
    Zero,
}

/// Plans any statement this module handles.
pub fn plan(session: &Session, statement: Statement) -> Result<PlanNode> {
    match statement {
        Statement::SetTransaction { modes } => plan_set_transaction(session, &modes),
        Statement::BeginTransaction { modes } => plan_begin_transaction(session, &modes),
    }
}

/// Handles `SET TRANSACTION` by applying `modes` to the session's open
/// transaction.
///
/// Errors from [`apply_transaction_modes`] are returned verbatim, and any
/// setting it applied before failing stays in place.
pub fn plan_set_transaction(session: &Session, modes: &TransactionModes) -> Result<PlanNode> {
    debug!("SET TRANSACTION {}", modes);
    let mut state = session.lock_txn_state();
    apply_transaction_modes(modes, &mut *state)?;
    Ok(PlanNode::Zero)
}

/// Handles `BEGIN TRANSACTION` by opening a transaction and then applying
/// `modes` to it.
///
/// If the modes fail to apply, the transaction remains open with whatever
/// settings were applied before the failure.
pub fn plan_begin_transaction(session: &Session, modes: &TransactionModes) -> Result<PlanNode> {
    debug!("BEGIN TRANSACTION {}", modes);
    let mut state = session.lock_txn_state();
    state.begin()?;
    apply_transaction_modes(modes, &mut *state)?;
    Ok(PlanNode::Zero)
}
