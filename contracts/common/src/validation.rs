//! Validation Helpers for the FundMe Protocol
//!
//! Reusable validation macro and guards shared by the contracts.
//!
//! ```rust,ignore
//! use fundme_common::check;
//!
//! check!(caller == state.owner, FundMeError::Unauthorized { expected, actual });
//! ```

use crate::errors::{FundMeError, FundMeResult};
use crate::types::Address;

// ============ Validation Macro ============

/// Check a condition and return an error if it fails.
#[macro_export]
macro_rules! check {
    ($condition:expr, $error:expr) => {
        if !($condition) {
            return Err($error);
        }
    };
}

pub use check;

// ============ Address Guards ============

/// Rejects the all-zero address, which no account can hold
pub fn require_nonzero_address(address: &Address, reason: &'static str) -> FundMeResult<()> {
    if address == &[0u8; 32] {
        return Err(FundMeError::InvalidAddress { reason });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(pass: bool) -> FundMeResult<()> {
        check!(pass, FundMeError::ZeroAmount);
        Ok(())
    }

    #[test]
    fn test_check_macro() {
        assert!(checked(true).is_ok());
        assert_eq!(checked(false), Err(FundMeError::ZeroAmount));
    }

    #[test]
    fn test_require_nonzero_address() {
        assert!(require_nonzero_address(&[1u8; 32], "owner").is_ok());
        assert_eq!(
            require_nonzero_address(&[0u8; 32], "owner"),
            Err(FundMeError::InvalidAddress { reason: "owner" })
        );
    }
}
