//! Funding Ledger & Custody Contract
//!
//! Owns all deposited native value, maintains the funder ledger, admits
//! deposits against a reference-currency minimum, and executes the
//! owner-gated sweep.
//!
//! ## Interaction ordering
//!
//! The contract touches untrusted code at exactly two points, and the
//! ordering around each is part of the contract:
//!
//! - `fund`: the price feed is read **before** any ledger mutation. Every
//!   failure path (feed unavailable, conversion overflow, below minimum)
//!   returns with the ledger untouched.
//! - `withdraw`: the ledger is cleared **before** the outbound value
//!   transfer, so re-entrant observers can never see a non-empty ledger
//!   mid-sweep. A rejected transfer restores the cleared records exactly
//!   and fails the whole call.

use core::mem;

use fundme_common::{
    constants::limits,
    errors::{FundMeError, FundMeResult},
    events::{EventLog, FundMeEvent},
    math::{meets_minimum, native_to_usd, safe_add},
    types::{Address, FundMeState, PriceQuote},
    Vec,
};
use fundme_price_feed::FeedState;

pub mod dispatch;


// ============ Requests & Outcomes ============

/// Request to deposit the attached native value
#[derive(Debug, Clone)]
pub struct FundRequest {
    /// Depositing account
    pub funder: Address,
    /// Native base units attached to the call
    pub amount: u128,
    /// Current block height
    pub block_height: u64,
}

/// Result of an admitted deposit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundOutcome {
    /// Reference-currency value the deposit was admitted at
    pub usd_value: u128,
    /// Funder's cumulative contribution after this deposit
    pub total_contribution: u128,
    /// Funder count after this deposit
    pub funder_count: u64,
}

/// Request to sweep the custodied balance
#[derive(Debug, Clone)]
pub struct WithdrawRequest {
    /// Calling account; must be the owner
    pub caller: Address,
    /// Current block height
    pub block_height: u64,
}

/// Result of a completed sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawOutcome {
    /// Native base units transferred to the owner
    pub amount: u128,
    /// Recipient of the transfer
    pub recipient: Address,
    /// Number of funder records cleared
    pub funders_cleared: u64,
}

// ============ Environment Seam ============

/// Outbound native-value transfer performed by the execution environment.
///
/// The custodied balance lives with the environment, not in `FundMeState`;
/// this is the single interaction through which it leaves the contract.
pub trait ValueTransfer {
    /// Move `amount` of custodied value to `to`. Returns `false` if the
    /// recipient rejects the transfer.
    fn transfer(&mut self, to: Address, amount: u128) -> bool;
}

// ============ Core Operations ============

/// Admit a deposit.
///
/// Reads the price feed, converts the attached amount into the reference
/// currency using the feed's reported decimals, and checks it against
/// `limits::MINIMUM_USD`. On admission the funder is appended to the
/// ledger (once) and their cumulative contribution grows by the **native**
/// amount; the conversion is used only for the threshold test.
///
/// Repeat deposits accumulate; the funder is recorded once.
///
/// # Errors
/// - `OracleUnavailable`: feed read failed; no state change
/// - `InsufficientContribution`: converted value below the minimum
/// - `Overflow`: conversion or accumulation exceeded u128
pub fn execute_fund(
    req: &FundRequest,
    state: &mut FundMeState,
    feed: &FeedState,
    events: &mut EventLog,
) -> FundMeResult<FundOutcome> {
    // 1. External read, before anything else
    let quote = fundme_price_feed::latest_round(feed)?;

    // 2. Admission check in reference currency
    let usd_value = native_to_usd(req.amount, &quote)?;
    if !meets_minimum(usd_value) {
        return Err(FundMeError::InsufficientContribution {
            usd_value,
            minimum: limits::MINIMUM_USD,
        });
    }

    // 3. Remaining fallible work before any mutation
    let total_contribution = safe_add(state.contribution(&req.funder), req.amount)?;

    // 4. Ledger mutation (infallible from here)
    if !state.is_funder(&req.funder) {
        state.funders.push(req.funder);
    }
    state.contributions.insert(req.funder, total_contribution);

    let funder_count = state.funder_count();

    // 5. Emit event
    events.emit(FundMeEvent::Funded {
        funder: req.funder,
        amount: req.amount,
        usd_value,
        total_contribution,
        funder_count,
        block_height: req.block_height,
    });

    Ok(FundOutcome {
        usd_value,
        total_contribution,
        funder_count,
    })
}

/// Sweep the entire custodied balance to the owner and reset the ledger.
///
/// The ledger is cleared before the transfer is attempted. If the
/// recipient rejects the value, the cleared records are restored exactly
/// and the call fails `TransferFailed`; the sweep is all-or-nothing.
///
/// Post-conditions on success: funder count is 0, every previously
/// tracked contribution reads 0, and the custodied balance is 0.
///
/// # Errors
/// - `Unauthorized`: caller is not the owner; no state change
/// - `TransferFailed`: recipient rejected the value; ledger restored
pub fn execute_withdraw<T: ValueTransfer>(
    req: &WithdrawRequest,
    state: &mut FundMeState,
    custodied: u128,
    vault: &mut T,
    events: &mut EventLog,
) -> FundMeResult<WithdrawOutcome> {
    // 1. Owner gate
    if req.caller != state.owner {
        return Err(FundMeError::Unauthorized {
            expected: state.owner,
            actual: req.caller,
        });
    }

    // 2. Effects: clear the ledger before the interaction
    let cleared_funders = mem::take(&mut state.funders);
    let cleared_contributions = mem::take(&mut state.contributions);
    let funders_cleared = cleared_funders.len() as u64;

    // 3. Interaction: move the captured balance
    if !vault.transfer(state.owner, custodied) {
        // Rejected: restore the ledger exactly and fail the whole call
        state.funders = cleared_funders;
        state.contributions = cleared_contributions;
        return Err(FundMeError::TransferFailed {
            to: state.owner,
            amount: custodied,
        });
    }

    // 4. Emit event
    events.emit(FundMeEvent::LedgerSwept {
        owner: state.owner,
        amount: custodied,
        funders_cleared,
        block_height: req.block_height,
    });

    Ok(WithdrawOutcome {
        amount: custodied,
        recipient: state.owner,
        funders_cleared,
    })
}

// ============ Queries ============

/// Current price as reported by the feed (pass-through).
///
/// Propagates `OracleUnavailable`; performs no state change.
pub fn get_current_price(feed: &FeedState) -> FundMeResult<PriceQuote> {
    fundme_price_feed::latest_round(feed)
}

// ============ Persisted State ============

/// Canonical persisted encoding of the ledger state.
///
/// The u32 funder count is the first word of the encoding; external
/// tooling reads it at offset 0.
pub fn state_bytes(state: &FundMeState) -> Vec<u8> {
    borsh::to_vec(state).unwrap_or_default()
}

/// Decode a persisted ledger state
pub fn state_from_bytes(bytes: &[u8]) -> Option<FundMeState> {
    borsh::from_slice(bytes).ok()
}

// ============ Tests ============
