//! SQL-level transaction modes as produced by the parser.
//!
//! The parser hands mode values over as small integer codes. Each enumeration
//! carries an explicit `Unspecified` member, distinct from any real value, and
//! an `Unrecognized` member holding any code outside the closed set so that
//! the mapper can reject it.

use std::fmt;

use crate::errors::{Result, TxnModeError};

/// Isolation level requested by `SET TRANSACTION ISOLATION LEVEL ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IsolationLevel {
    #[default]
    Unspecified,
    Snapshot,
    Serializable,
    /// A parser code this engine does not know.
    Unrecognized(u8),
}

impl IsolationLevel {
    /// Decodes a parser code. Never fails; unknown codes are kept as
    /// [`IsolationLevel::Unrecognized`].
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => IsolationLevel::Unspecified,
            1 => IsolationLevel::Snapshot,
            2 => IsolationLevel::Serializable,
            other => IsolationLevel::Unrecognized(other),
        }
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsolationLevel::Unspecified => f.write_str("UNSPECIFIED"),
            IsolationLevel::Snapshot => f.write_str("SNAPSHOT"),
            IsolationLevel::Serializable => f.write_str("SERIALIZABLE"),
            IsolationLevel::Unrecognized(code) => write!(f, "IsolationLevel({code})"),
        }
    }
}

/// User priority requested by `SET TRANSACTION PRIORITY ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserPriority {
    #[default]
    Unspecified,
    Low,
    Normal,
    High,
    Unrecognized(u8),
}

impl UserPriority {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => UserPriority::Unspecified,
            1 => UserPriority::Low,
            2 => UserPriority::Normal,
            3 => UserPriority::High,
            other => UserPriority::Unrecognized(other),
        }
    }
}

impl fmt::Display for UserPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserPriority::Unspecified => f.write_str("UNSPECIFIED"),
            UserPriority::Low => f.write_str("LOW"),
            UserPriority::Normal => f.write_str("NORMAL"),
            UserPriority::High => f.write_str("HIGH"),
            UserPriority::Unrecognized(code) => write!(f, "UserPriority({code})"),
        }
    }
}

/// `READ ONLY` / `READ WRITE` access intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadWriteMode {
    #[default]
    Unspecified,
    ReadOnly,
    ReadWrite,
    Unrecognized(u8),
}

impl ReadWriteMode {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => ReadWriteMode::Unspecified,
            1 => ReadWriteMode::ReadOnly,
            2 => ReadWriteMode::ReadWrite,
            other => ReadWriteMode::Unrecognized(other),
        }
    }
}

impl fmt::Display for ReadWriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadWriteMode::Unspecified => f.write_str("UNSPECIFIED"),
            ReadWriteMode::ReadOnly => f.write_str("READ ONLY"),
            ReadWriteMode::ReadWrite => f.write_str("READ WRITE"),
            ReadWriteMode::Unrecognized(code) => write!(f, "ReadWriteMode({code})"),
        }
    }
}

/// The full set of modes declared by one `SET TRANSACTION` or
/// `BEGIN TRANSACTION` statement.
///
/// Built once per parsed statement and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransactionModes {
    pub isolation: IsolationLevel,
    pub user_priority: UserPriority,
    pub read_write_mode: ReadWriteMode,
}

impl TransactionModes {
    /// Creates a new `TransactionModes` from its three fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use txnmode::prelude::*;
    ///
    /// let modes = TransactionModes::new(
    ///     IsolationLevel::Serializable,
    ///     UserPriority::High,
    ///     ReadWriteMode::ReadWrite,
    /// );
    /// assert_eq!(
    ///     modes.to_string(),
    ///     "ISOLATION LEVEL SERIALIZABLE, PRIORITY HIGH, READ WRITE"
    /// );
    /// ```
    pub fn new(
        isolation: IsolationLevel,
        user_priority: UserPriority,
        read_write_mode: ReadWriteMode,
    ) -> Self {
        Self {
            isolation,
            user_priority,
            read_write_mode,
        }
    }

    /// Returns `true` if none of the three modes is specified.
    pub fn is_empty(&self) -> bool {
        self.isolation == IsolationLevel::Unspecified
            && self.user_priority == UserPriority::Unspecified
            && self.read_write_mode == ReadWriteMode::Unspecified
    }

    /// Merges the mode clauses of `other` into `self`.
    ///
    /// A statement may list its modes as several clauses
    /// (`ISOLATION LEVEL SNAPSHOT, PRIORITY LOW`); the parser folds them
    /// together with this method. Every specified field of `other` is copied
    /// into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`TxnModeError::DuplicateMode`] if a field is specified on both
    /// sides. All fields are checked before any is written, so `self` is left
    /// untouched on error.
    pub fn merge(&mut self, other: TransactionModes) -> Result<()> {
        if self.isolation != IsolationLevel::Unspecified
            && other.isolation != IsolationLevel::Unspecified
        {
            return Err(TxnModeError::DuplicateMode("isolation level"));
        }
        if self.user_priority != UserPriority::Unspecified
            && other.user_priority != UserPriority::Unspecified
        {
            return Err(TxnModeError::DuplicateMode("user priority"));
        }
        if self.read_write_mode != ReadWriteMode::Unspecified
            && other.read_write_mode != ReadWriteMode::Unspecified
        {
            return Err(TxnModeError::DuplicateMode("read mode"));
        }

        if other.isolation != IsolationLevel::Unspecified {
            self.isolation = other.isolation;
        }
        if other.user_priority != UserPriority::Unspecified {
            self.user_priority = other.user_priority;
        }
        if other.read_write_mode != ReadWriteMode::Unspecified {
            self.read_write_mode = other.read_write_mode;
        }
        Ok(())
    }
}

impl fmt::Display for TransactionModes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if self.isolation != IsolationLevel::Unspecified {
            write!(f, "ISOLATION LEVEL {}", self.isolation)?;
            sep = ", ";
        }
        if self.user_priority != UserPriority::Unspecified {
            write!(f, "{sep}PRIORITY {}", self.user_priority)?;
            sep = ", ";
        }
        if self.read_write_mode != ReadWriteMode::Unspecified {
            write!(f, "{sep}{}", self.read_write_mode)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(IsolationLevel::from_code(0), IsolationLevel::Unspecified);
        assert_eq!(IsolationLevel::from_code(2), IsolationLevel::Serializable);
        assert_eq!(IsolationLevel::from_code(3), IsolationLevel::Unrecognized(3));
        assert_eq!(UserPriority::from_code(3), UserPriority::High);
        assert_eq!(UserPriority::from_code(4), UserPriority::Unrecognized(4));
        assert_eq!(ReadWriteMode::from_code(1), ReadWriteMode::ReadOnly);
        assert_eq!(ReadWriteMode::from_code(200), ReadWriteMode::Unrecognized(200));
    }

    #[test]
    fn test_display_unrecognized() {
        assert_eq!(IsolationLevel::Unrecognized(7).to_string(), "IsolationLevel(7)");
        assert_eq!(UserPriority::Unrecognized(9).to_string(), "UserPriority(9)");
        assert_eq!(ReadWriteMode::Unrecognized(5).to_string(), "ReadWriteMode(5)");
    }

    #[test]
    fn test_display_modes() {
        assert_eq!(TransactionModes::default().to_string(), "");

        let modes = TransactionModes {
            user_priority: UserPriority::Low,
            read_write_mode: ReadWriteMode::ReadOnly,
            ..Default::default()
        };
        assert_eq!(modes.to_string(), "PRIORITY LOW, READ ONLY");
    }

    #[test]
    fn test_merge_disjoint() {
        let mut modes = TransactionModes {
            isolation: IsolationLevel::Snapshot,
            ..Default::default()
        };
        modes
            .merge(TransactionModes {
                user_priority: UserPriority::High,
                ..Default::default()
            })
            .unwrap();
        modes
            .merge(TransactionModes {
                read_write_mode: ReadWriteMode::ReadWrite,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            modes,
            TransactionModes::new(
                IsolationLevel::Snapshot,
                UserPriority::High,
                ReadWriteMode::ReadWrite
            )
        );
        assert!(!modes.is_empty());
    }

    #[test]
    fn test_merge_duplicate_leaves_self_untouched() {
        let mut modes = TransactionModes::new(
            IsolationLevel::Unspecified,
            UserPriority::Low,
            ReadWriteMode::Unspecified,
        );
        let before = modes;

        // Isolation would merge cleanly, but priority collides.
        let err = modes
            .merge(TransactionModes::new(
                IsolationLevel::Serializable,
                UserPriority::High,
                ReadWriteMode::Unspecified,
            ))
            .unwrap_err();

        assert_eq!(err, TxnModeError::DuplicateMode("user priority"));
        assert_eq!(modes, before);
    }
}
