//! Core Types for the FundMe Protocol
//!
//! Fundamental data structures shared by the price feed and ledger contracts.

use crate::errors::{FundMeError, FundMeResult};
use crate::validation::require_nonzero_address;
use crate::{BTreeMap, Vec};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Type alias for account identifiers (32-byte hash)
pub type Address = [u8; 32];

/// Type alias for contract/app identifiers
pub type AppId = [u8; 32];

/// Derive a deterministic account identifier from raw public key bytes
pub fn derive_account_id(pubkey: &[u8]) -> Address {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(pubkey);
    let result = hasher.finalize();
    let mut id = [0u8; 32];
    id.copy_from_slice(&result);
    id
}

// ============ Oracle Types ============

/// Latest round reported by the price feed.
///
/// Ephemeral: consumed once per admission check, never persisted. `answer`
/// is the reference-currency price of one native unit, scaled by
/// `10^decimals`; the sign is carried through from the feed and validated
/// at the read boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct PriceQuote {
    /// Price scaled by `10^decimals`
    pub answer: i64,
    /// Decimal precision of `answer`, reported by the feed itself
    pub decimals: u8,
}

impl PriceQuote {
    /// Creates a new quote
    pub fn new(answer: i64, decimals: u8) -> Self {
        Self { answer, decimals }
    }
}

// ============ Ledger Types ============

/// Funding ledger and custody contract state.
///
/// Field order is part of the external contract: `funders` comes first so
/// the canonical borsh encoding places the funder count (u32 length prefix)
/// at offset 0, where external tooling inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FundMeState {
    /// Distinct funders in first-contribution order
    pub funders: Vec<Address>,
    /// Cumulative contribution per account, in native base units.
    /// An account has an entry iff it appears in `funders`.
    pub contributions: BTreeMap<Address, u128>,
    /// Privileged account, fixed at construction
    pub owner: Address,
    /// Price feed reference, fixed at construction
    pub price_feed: AppId,
}

impl FundMeState {
    /// Creates an empty ledger owned by the constructing account.
    ///
    /// No value may be attached at construction; constructing is not a
    /// contribution.
    pub fn new(owner: Address, price_feed: AppId) -> FundMeResult<Self> {
        require_nonzero_address(&owner, "owner")?;
        require_nonzero_address(&price_feed, "price_feed")?;
        Ok(Self {
            funders: Vec::new(),
            contributions: BTreeMap::new(),
            owner,
            price_feed,
        })
    }

    /// Owner of the contract
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Reference to the price feed supplied at construction
    pub fn price_feed(&self) -> AppId {
        self.price_feed
    }

    /// Number of distinct funders since the last sweep
    pub fn funder_count(&self) -> u64 {
        self.funders.len() as u64
    }

    /// Funder at `index` in first-contribution order
    pub fn funder(&self, index: u64) -> FundMeResult<Address> {
        self.funders
            .get(index as usize)
            .copied()
            .ok_or(FundMeError::IndexOutOfRange {
                index,
                len: self.funders.len() as u64,
            })
    }

    /// Cumulative contribution of `account`; 0 for accounts that never
    /// contributed or were reset by a sweep
    pub fn contribution(&self, account: &Address) -> u128 {
        self.contributions.get(account).copied().unwrap_or(0)
    }

    /// Whether `account` is currently tracked in the ledger
    pub fn is_funder(&self, account: &Address) -> bool {
        self.contributions.contains_key(account)
    }
}

// ============ Action Types ============

/// Actions for the funding ledger contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum LedgerAction {
    /// Deposit the attached native value
    Fund { amount: u128 },
    /// Sweep the custodied balance and reset the ledger (owner only)
    Withdraw,
}

/// Actions for the price feed contract (substitute feed write side)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum FeedAction {
    /// Create the feed with its initial round
    Initialize {
        admin: Address,
        operator: Address,
        decimals: u8,
        initial_answer: i64,
    },
    /// Publish a new answer (operator only)
    UpdateAnswer { answer: i64 },
    /// Change the publishing operator (admin only)
    SetOperator { operator: Address },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(n: u8) -> Address {
        [n; 32]
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = FundMeState::new(account(1), account(9)).unwrap();
        assert_eq!(state.funder_count(), 0);
        assert_eq!(state.owner(), account(1));
        assert_eq!(state.price_feed(), account(9));
        assert_eq!(state.contribution(&account(2)), 0);
        assert!(!state.is_funder(&account(2)));
    }

    #[test]
    fn test_new_state_rejects_zero_addresses() {
        assert!(matches!(
            FundMeState::new([0u8; 32], account(9)),
            Err(FundMeError::InvalidAddress { .. })
        ));
        assert!(matches!(
            FundMeState::new(account(1), [0u8; 32]),
            Err(FundMeError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_funder_index_out_of_range() {
        let state = FundMeState::new(account(1), account(9)).unwrap();
        let result = state.funder(0);
        assert_eq!(
            result,
            Err(FundMeError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_funder_count_is_borsh_prefix() {
        // External tooling reads the funder count from the first word of
        // the persisted encoding; the Vec length prefix must stay there.
        let mut state = FundMeState::new(account(1), account(9)).unwrap();
        state.funders.push(account(2));
        state.funders.push(account(3));
        state.contributions.insert(account(2), 1);
        state.contributions.insert(account(3), 1);

        let bytes = borsh::to_vec(&state).unwrap();
        let count = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
        assert_eq!(count, 2);
    }

    #[test]
    fn test_derive_account_id_is_deterministic() {
        let a = derive_account_id(b"alice-pubkey");
        let b = derive_account_id(b"alice-pubkey");
        let c = derive_account_id(b"bob-pubkey");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
