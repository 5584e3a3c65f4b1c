pub mod errors;
pub mod modes;
pub mod engine;
pub mod mapper;
pub mod txn_state;
pub mod applier;
pub mod config;
pub mod session;
pub mod statement;

// Re-export key types and functions for easier access
pub use errors::{Result, TxnModeError};
pub use modes::{IsolationLevel, ReadWriteMode, TransactionModes, UserPriority};
pub use engine::{EngineIsolation, EnginePriority};
pub use mapper::{map_isolation, map_priority, map_read_write_mode};
pub use txn_state::{SessionTxnState, TransactionState};
pub use applier::apply_transaction_modes;
pub use config::SessionConfig;
pub use session::{prelude, Session};
pub use statement::{plan, plan_begin_transaction, plan_set_transaction, PlanNode, Statement};
