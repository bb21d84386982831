//! Call Dispatch for the Funding Ledger
//!
//! Host-facing entry point. Calls arrive as a caller, an attached native
//! value, and an opaque CBOR payload; the payload selects the operation.
//!
//! Deposit routing follows the contract's open-door rule: value sent with
//! no payload, or with a payload this contract does not recognize, is
//! treated exactly like an explicit `fund` call and goes through the same
//! admission check.

use fundme_common::{
    errors::FundMeResult,
    events::EventLog,
    types::{Address, FundMeState, LedgerAction},
    Vec,
};
use fundme_price_feed::FeedState;
use serde::{Deserialize, Serialize};

use crate::{
    execute_fund, execute_withdraw, FundOutcome, FundRequest, ValueTransfer, WithdrawOutcome,
    WithdrawRequest,
};

// ============ Operation Codes ============

/// Operation codes for ledger calls (encoded in the payload)
pub mod op {
    /// Deposit the attached native value
    pub const FUND: u8 = 0x10;
    /// Sweep the custodied balance (owner only)
    pub const WITHDRAW: u8 = 0x11;
}

// ============ Call Payload ============

/// Decoded call payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerWitness {
    /// Operation type (see `op` module)
    pub op: u8,
}

impl LedgerWitness {
    /// Payload for an explicit fund call
    pub fn fund() -> Self {
        Self { op: op::FUND }
    }

    /// Payload for a withdraw call
    pub fn withdraw() -> Self {
        Self { op: op::WITHDRAW }
    }

    /// CBOR encoding of this payload
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        let _ = ciborium::ser::into_writer(self, &mut buf);
        buf
    }
}

// ============ Call Surface ============

/// One invocation as seen from the host
#[derive(Debug, Clone)]
pub struct CallData<'a> {
    /// Calling account
    pub caller: Address,
    /// Native base units attached to the call
    pub attached_value: u128,
    /// Raw call payload; may be empty
    pub payload: &'a [u8],
    /// Current block height
    pub block_height: u64,
}

/// Outcome of a dispatched call, returned to the host for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// A deposit was admitted
    Funded(FundOutcome),
    /// The custodied balance was swept
    Swept(WithdrawOutcome),
}

/// Dispatch one call against the ledger.
///
/// `custodied` is the contract's balance as captured by the host before
/// this call's attached value is counted.
pub fn dispatch<T: ValueTransfer>(
    call: &CallData<'_>,
    state: &mut FundMeState,
    feed: &FeedState,
    custodied: u128,
    vault: &mut T,
    events: &mut EventLog,
) -> FundMeResult<CallOutcome> {
    match decode_action(call) {
        LedgerAction::Fund { amount } => execute_fund(
            &FundRequest {
                funder: call.caller,
                amount,
                block_height: call.block_height,
            },
            state,
            feed,
            events,
        )
        .map(CallOutcome::Funded),
        LedgerAction::Withdraw => execute_withdraw(
            &WithdrawRequest {
                caller: call.caller,
                block_height: call.block_height,
            },
            state,
            custodied,
            vault,
            events,
        )
        .map(CallOutcome::Swept),
    }
}

// ============ Payload Decoding ============

fn decode_action(call: &CallData<'_>) -> LedgerAction {
    match parse_witness(call.payload) {
        Some(w) if w.op == op::WITHDRAW => LedgerAction::Withdraw,
        // Explicit fund, an unknown op code, or an undecodable/absent
        // payload: the attached value goes through the admission check
        _ => LedgerAction::Fund {
            amount: call.attached_value,
        },
    }
}

fn parse_witness(payload: &[u8]) -> Option<LedgerWitness> {
    if payload.is_empty() {
        return None;
    }
    ciborium::de::from_reader(payload).ok()
}

// ============ Tests ============
