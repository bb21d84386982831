//! Error Types for the FundMe Protocol
//!
//! Typed errors carrying the values that made the call fail. Every error
//! aborts its call entirely; there is no partial state change to report.

use crate::types::Address;

/// Result type alias for FundMe operations
pub type FundMeResult<T> = Result<T, FundMeError>;

/// Main error enum for all FundMe protocol errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundMeError {
    // ============ Admission Errors ============
    /// Converted reference-currency value of the deposit is below the
    /// minimum contribution
    InsufficientContribution { usd_value: u128, minimum: u128 },

    /// Zero amount not allowed
    ZeroAmount,

    // ============ Authorization Errors ============
    /// Caller is not authorized for this operation
    Unauthorized { expected: Address, actual: Address },

    // ============ Oracle Errors ============
    /// Price feed is unreachable, inactive, or returned unusable data
    OracleUnavailable { reason: &'static str },

    // ============ Ledger Errors ============
    /// Funder index at or beyond the current funder count
    IndexOutOfRange { index: u64, len: u64 },

    /// Outbound native-value transfer was rejected by the recipient
    TransferFailed { to: Address, amount: u128 },

    // ============ Math Errors ============
    /// Arithmetic overflow occurred
    Overflow,

    /// Division by zero
    DivisionByZero,

    // ============ Input Validation Errors ============
    /// Invalid address (e.g., zero address)
    InvalidAddress { reason: &'static str },

    // ============ State Errors ============
    /// Declared state does not match the validated transition
    InvalidStateTransition,
}

impl FundMeError {
    /// Returns a stable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientContribution { .. } => "E001_INSUFFICIENT_CONTRIBUTION",
            Self::ZeroAmount => "E002_ZERO_AMOUNT",
            Self::Unauthorized { .. } => "E010_UNAUTHORIZED",
            Self::OracleUnavailable { .. } => "E020_ORACLE_UNAVAILABLE",
            Self::IndexOutOfRange { .. } => "E030_INDEX_OUT_OF_RANGE",
            Self::TransferFailed { .. } => "E031_TRANSFER_FAILED",
            Self::Overflow => "E040_OVERFLOW",
            Self::DivisionByZero => "E041_DIV_ZERO",
            Self::InvalidAddress { .. } => "E050_INVALID_ADDRESS",
            Self::InvalidStateTransition => "E051_INVALID_STATE",
        }
    }

    /// Returns true if the caller can fix the condition and retry
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InsufficientContribution { .. } => true, // send more value
            Self::OracleUnavailable { .. } => true,        // wait for the feed
            Self::TransferFailed { .. } => true,           // retry the sweep
            _ => false,
        }
    }
}
